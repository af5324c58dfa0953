//! Board inputs for the ignition controller.
//!
//! Digital inputs are read through `embedded-hal` 1.0 pins; the two analog
//! channels go through the RP2040 ADC, which still exposes the `embedded-hal`
//! 0.2 `OneShot` trait.

use embedded_hal::digital::InputPin;
use embedded_hal_0_2::adc::{Channel, OneShot};
use ignition_headlights::SignalSampler;
use rp_pico::hal::adc::Adc;

/// Full-scale value of the RP2040's 12-bit ADC.
const ADC_FULL_SCALE: f32 = 4095.0;

/// [`SignalSampler`] for the Pico wiring.
///
/// * `B` - Ignition button pin (pulled down, high while pressed)
/// * `S` - Seat occupancy pin (pulled down, high while occupied)
/// * `P` - Selector potentiometer ADC pin
/// * `L` - Light sensor ADC pin
pub struct BoardSignals<B, S, P, L> {
    ignition: B,
    seat: S,
    adc: Adc,
    potentiometer: P,
    light: L,
}

impl<B, S, P, L> BoardSignals<B, S, P, L>
where
    B: InputPin,
    S: InputPin,
    P: Channel<Adc>,
    L: Channel<Adc>,
    Adc: OneShot<Adc, u16, P> + OneShot<Adc, u16, L>,
{
    pub fn new(ignition: B, seat: S, adc: Adc, potentiometer: P, light: L) -> Self {
        Self {
            ignition,
            seat,
            adc,
            potentiometer,
            light,
        }
    }
}

fn normalize(raw: u16) -> f32 {
    (raw as f32 / ADC_FULL_SCALE).clamp(0.0, 1.0)
}

impl<B, S, P, L> SignalSampler for BoardSignals<B, S, P, L>
where
    B: InputPin,
    S: InputPin,
    P: Channel<Adc>,
    L: Channel<Adc>,
    Adc: OneShot<Adc, u16, P> + OneShot<Adc, u16, L>,
{
    fn ignition_pressed(&mut self) -> bool {
        self.ignition.is_high().unwrap_or(false)
    }

    fn seat_occupied(&mut self) -> bool {
        self.seat.is_high().unwrap_or(false)
    }

    fn potentiometer(&mut self) -> f32 {
        let raw: u16 = nb::block!(OneShot::<Adc, u16, P>::read(
            &mut self.adc,
            &mut self.potentiometer
        ))
        .unwrap_or(0);
        normalize(raw)
    }

    fn light_level(&mut self) -> f32 {
        let raw: u16 =
            nb::block!(OneShot::<Adc, u16, L>::read(&mut self.adc, &mut self.light)).unwrap_or(0);
        normalize(raw)
    }
}
