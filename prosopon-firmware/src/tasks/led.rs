//! Status LED task
//!
//! Slow heartbeat while the sensor is healthy, rapid blink after a fault,
//! so a dead sensor is visible without a debug probe attached.

use defmt::*;
use embassy_stm32::gpio::Output;
use embassy_time::Timer;

use crate::channels::CLIMATE_READING;

const HEALTHY_PERIOD_MS: u64 = 1_000;
const FAULT_PERIOD_MS: u64 = 200;

#[embassy_executor::task]
pub async fn led_task(mut led: Output<'static>) {
    info!("LED task started");

    let mut faulted = false;
    loop {
        if let Some(sample) = CLIMATE_READING.try_take() {
            faulted = sample.is_none();
        }

        let period = if faulted {
            FAULT_PERIOD_MS
        } else {
            HEALTHY_PERIOD_MS
        };
        led.toggle();
        Timer::after_millis(period / 2).await;
    }
}
