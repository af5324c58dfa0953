#![no_std]
#![no_main]

use panic_halt as _;
use rp_pico::entry;
use rp_pico::hal::{
    Clock, Sio, Timer,
    adc::{Adc, AdcPin},
    clocks::init_clocks_and_plls,
    fugit::RateExtU32,
    gpio::FunctionUart,
    pac,
    uart::{DataBits, StopBits, UartConfig, UartPeripheral},
    watchdog::Watchdog,
};
use rtt_target::{rprintln, rtt_init_print};

use ignition_headlights::{ControlConfig, ControlLoop, GpioOutputs, Millis};
use rp_pico_ignition_demo::signals::BoardSignals;

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("=== RP Pico Ignition & Headlights ===");

    // Get peripherals
    let mut pac = pac::Peripherals::take().unwrap();

    // Set up watchdog driver
    let mut watchdog = Watchdog::new(pac.WATCHDOG);

    // Configure clocks (125 MHz)
    let clocks = init_clocks_and_plls(
        rp_pico::XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();

    let sio = Sio::new(pac.SIO);
    let pins = rp_pico::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    // Inputs: GP14 ignition button, GP15 seat sensor (both active-high)
    let ignition = pins.gpio14.into_pull_down_input();
    let seat = pins.gpio15.into_pull_down_input();

    // Analog: GP26/ADC0 selector potentiometer, GP27/ADC1 light sensor
    let adc = Adc::new(pac.ADC, &mut pac.RESETS);
    let potentiometer = AdcPin::new(pins.gpio26.into_floating_input()).unwrap();
    let light = AdcPin::new(pins.gpio27.into_floating_input()).unwrap();

    // Outputs: onboard LED as engine indicator, GP16/GP17 right/left headlights
    let outputs = GpioOutputs::new(
        pins.led.into_push_pull_output(),
        pins.gpio16.into_push_pull_output(),
        pins.gpio17.into_push_pull_output(),
    );

    // Console: UART0 on GP0/GP1 at 115200 8N1
    let uart_pins = (
        pins.gpio0.into_function::<FunctionUart>(),
        pins.gpio1.into_function::<FunctionUart>(),
    );
    let uart = UartPeripheral::new(pac.UART0, uart_pins, &mut pac.RESETS)
        .enable(
            UartConfig::new(115200.Hz(), DataBits::Eight, None, StopBits::One),
            clocks.peripheral_clock.freq(),
        )
        .unwrap();

    let mut timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);

    let signals = BoardSignals::new(ignition, seat, adc, potentiometer, light);
    let mut controller = ControlLoop::new(ControlConfig::<Millis>::default(), signals, outputs, uart);

    rprintln!(
        "Control loop running every {} ms",
        controller.config().tick_period().0
    );

    controller.run(&mut timer)
}
