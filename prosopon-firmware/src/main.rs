//! Prosopon firmware entry point
//!
//! Board wiring (STM32F103C8 "blue pill"):
//! - SSD1306 OLED on I2C1 (PB6=SCL, PB7=SDA)
//! - DHT11 data line on PA1
//! - Status LED on PC13 (active low)

#![no_std]
#![no_main]

mod channels;
mod tasks;

use defmt::*;
use embassy_executor::Spawner;
use embassy_stm32::bind_interrupts;
use embassy_stm32::gpio::{Flex, Level, Output, Speed};
use embassy_stm32::i2c::{self, I2c};
use embassy_stm32::peripherals::I2C1;
use embassy_stm32::time::Hertz;
use embassy_time::Duration;
use {defmt_rtt as _, panic_probe as _};

use crate::tasks::{face_task, led_task, sensor_task};

bind_interrupts!(struct Irqs {
    I2C1_EV => i2c::EventInterruptHandler<I2C1>;
    I2C1_ER => i2c::ErrorInterruptHandler<I2C1>;
});

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Prosopon firmware starting...");

    let p = embassy_stm32::init(Default::default());

    // Setup I2C for OLED (PB6=SCL, PB7=SDA)
    let mut i2c_config = i2c::Config::default();
    i2c_config.timeout = Duration::from_millis(100);

    let i2c = I2c::new(
        p.I2C1,
        p.PB6,
        p.PB7,
        Irqs,
        p.DMA1_CH6,
        p.DMA1_CH7,
        Hertz::khz(400),
        i2c_config,
    );

    // DHT11 single-wire data line
    let dht_pin = Flex::new(p.PA1);

    // Status LED (on-board, active low)
    let led = Output::new(p.PC13, Level::High, Speed::Low);

    unwrap!(spawner.spawn(face_task(i2c)));
    unwrap!(spawner.spawn(sensor_task(dht_pin)));
    unwrap!(spawner.spawn(led_task(led)));

    info!("All tasks spawned");
}
