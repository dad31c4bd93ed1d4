//! Climate sensor task
//!
//! Polls the DHT11 every couple of seconds. The sensor is slow and drops
//! the occasional frame, so each cycle gets a few attempts before a fault
//! is published.

use defmt::*;
use embassy_stm32::gpio::{Flex, Pull, Speed};
use embassy_time::{Duration, Instant, Ticker, Timer};

use prosopon_core::traits::sensor::{ClimateReading, SensorError};
use prosopon_drivers::sensor::{Dht11, DhtLine};

use crate::channels::CLIMATE_READING;

/// DHT11 minimum sampling period is 1 s; poll at 2 s for margin.
const POLL_INTERVAL_MS: u64 = 2_000;
/// Attempts per poll cycle before publishing a fault.
const READ_ATTEMPTS: u8 = 3;
/// Settle time between failed attempts.
const RETRY_DELAY_MS: u64 = 100;

/// DHT11 single-wire line on a flexible GPIO.
pub struct FlexDhtLine {
    pin: Flex<'static>,
}

impl FlexDhtLine {
    pub fn new(pin: Flex<'static>) -> Self {
        Self { pin }
    }
}

impl DhtLine for FlexDhtLine {
    async fn start_signal(&mut self) {
        self.pin.set_low();
        self.pin.set_as_output(Speed::Low);
        Timer::after_millis(20).await;
        self.pin.set_as_input(Pull::Up);
    }

    fn wait_for_level(&mut self, level: bool, timeout_us: u32) -> Result<u32, SensorError> {
        let start = Instant::now();
        while self.pin.is_high() != level {
            if start.elapsed().as_micros() as u32 > timeout_us {
                return Err(SensorError::Timeout);
            }
        }
        Ok(start.elapsed().as_micros() as u32)
    }
}

#[embassy_executor::task]
pub async fn sensor_task(pin: Flex<'static>) {
    info!("Sensor task started");

    let mut dht = Dht11::new(FlexDhtLine::new(pin));
    let mut ticker = Ticker::every(Duration::from_millis(POLL_INTERVAL_MS));

    loop {
        ticker.next().await;

        match read_with_retry(&mut dht).await {
            Ok(reading) => {
                debug!(
                    "Climate: {}.{} C, {}.{} %RH",
                    reading.temp_c_x10 / 10,
                    (reading.temp_c_x10 % 10).abs(),
                    reading.humidity_x10 / 10,
                    reading.humidity_x10 % 10,
                );
                CLIMATE_READING.signal(Some(reading));
            }
            Err(e) => {
                warn!("Climate read failed: {:?}", e);
                CLIMATE_READING.signal(None);
            }
        }
    }
}

/// Read the sensor, retrying a couple of times within one poll cycle.
async fn read_with_retry(dht: &mut Dht11<FlexDhtLine>) -> Result<ClimateReading, SensorError> {
    let mut last = SensorError::Timeout;
    for attempt in 0..READ_ATTEMPTS {
        if attempt > 0 {
            Timer::after_millis(RETRY_DELAY_MS).await;
        }
        match dht.read().await {
            Ok(reading) => return Ok(reading),
            Err(e) => last = e,
        }
    }
    Err(last)
}
