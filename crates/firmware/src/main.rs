//! Tiltwheel is [Embassy](https://embassy.dev)-based firmware for a handheld MIDI controller: two
//! pushbuttons, a capacitive touch pad, a potentiometer, and a three-axis analog accelerometer,
//! all translated into MIDI Control Change messages on a dedicated serial output. The firmware
//! runs on the [Nucleo-F767ZI development
//! board](https://www.st.com/en/evaluation-tools/nucleo-f767zi.html), which is powered by an
//! F7-series STM32 microcontroller.
//!
//! Once the board is up, the whole device is a single polling task: sample every input, compare
//! against the previous cycle, rescale whatever moved into the 7-bit controller domain, and push
//! the resulting messages out the UART at MIDI baud. There is nothing else: no configuration, no
//! persistence, and no way for the loop to end short of pulling power.
//!
//! For details about the hardware or how to wire it, see the `README`.

#![no_std]
#![no_main]

mod midi_out;
mod sampler;

use crate::{midi_out::MidiOut, sampler::Inputs};
use defmt::{info, unwrap};
use embassy_executor::Spawner;
use embassy_stm32::{
    Config,
    adc::{Adc, AdcChannel},
    gpio::{Input, Pull},
    time::Hertz,
    usart,
};
use embassy_time::Duration;
use tiltwheel_lib::{scheduler, surface::ControlSurface};

#[cfg(feature = "debug")]
use {defmt_rtt as _, panic_probe as _};
#[cfg(not(feature = "debug"))]
use panic_halt as _;

/// Suspension between polling cycles.
const CYCLE_INTERVAL: Duration = Duration::from_millis(10);

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Initializing Tiltwheel");

    let mut config = Config::default();
    {
        use embassy_stm32::rcc::*;
        // hse: high-speed external clock
        config.rcc.hse = Some(Hse {
            freq: Hertz(8_000_000),
            mode: HseMode::Bypass,
        });

        // pll: phase-locked loop, crucial for dividing clock
        config.rcc.pll_src = PllSource::HSE;
        config.rcc.pll = Some(Pll {
            prediv: PllPreDiv::DIV4,
            mul: PllMul::MUL216,
            divp: Some(PllPDiv::DIV2), // 8mhz / 4 * 216 / 2 = 216Mhz
            divq: None,
            divr: None,
        });
        config.rcc.ahb_pre = AHBPrescaler::DIV1;
        config.rcc.apb1_pre = APBPrescaler::DIV4;
        config.rcc.apb2_pre = APBPrescaler::DIV2;
        config.rcc.sys = Sysclk::PLL1_P;
    }
    let p = embassy_stm32::init(config);

    // The MIDI output is one-directional: 31250 baud, 8 data bits, no parity, 1 stop bit,
    // transmit only. Configured once here; the loop only ever writes.
    let mut uart_config = usart::Config::default();
    uart_config.baudrate = midi_out::MIDI_BAUD;
    uart_config.data_bits = usart::DataBits::DataBits8;
    uart_config.parity = usart::Parity::ParityNone;
    uart_config.stop_bits = usart::StopBits::STOP1;
    let tx = unwrap!(usart::UartTx::new_blocking(p.USART2, p.PD5, uart_config));
    let mut midi_out = MidiOut::new(tx);

    // Buttons and the touch module all present an active-high level on their pins. B1 (the
    // board's blue user button) serves as button A.
    let button_a = Input::new(p.PC13, Pull::Down);
    let button_b = Input::new(p.PC8, Pull::Down);
    let touch = Input::new(p.PC9, Pull::Down);

    // The wiper and the accelerometer's three analog outputs share ADC1, one conversion each per
    // cycle.
    let adc = Adc::new(p.ADC1);
    let mut inputs = Inputs::new(
        button_a,
        button_b,
        touch,
        adc,
        p.PA3.degrade_adc(),
        p.PA4.degrade_adc(),
        p.PA5.degrade_adc(),
        p.PA6.degrade_adc(),
    );

    let mut surface = ControlSurface::new();

    info!("Polling");
    scheduler::run_forever(
        || {
            let frame = inputs.sample();
            for message in surface.update(&frame) {
                midi_out.send(&message);
            }
        },
        CYCLE_INTERVAL,
    )
    .await
}
