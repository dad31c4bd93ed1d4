//! DHT11 temperature/humidity sensor
//!
//! Single-wire protocol: the controller holds the line low for >18 ms,
//! the sensor answers with an 80 us low / 80 us high preamble and then 40
//! data bits. Each bit is a ~50 us low separator followed by a high pulse
//! whose width encodes the value: ~26 us for 0, ~70 us for 1.
//!
//! Line access and timing live behind `DhtLine`, so frame acquisition and
//! decoding can be tested on the host with a scripted line.

use prosopon_core::traits::sensor::{ClimateReading, SensorError};

/// High-pulse width above which a data bit reads as 1 (microseconds).
const BIT_ONE_THRESHOLD_US: u32 = 50;
/// Widest pulse the sensor legally produces; past this the line is stuck.
const PULSE_TIMEOUT_US: u32 = 120;
/// Response preamble budget: 20-40 us turnaround plus the 80 us low.
const RESPONSE_TIMEOUT_US: u32 = 200;

/// Low-level single-wire line access with microsecond timing.
#[allow(async_fn_in_trait)]
pub trait DhtLine {
    /// Drive the start signal: hold the line low for at least 18 ms,
    /// then release it to the sensor.
    async fn start_signal(&mut self);

    /// Busy-wait until the line sits at `level`, returning the
    /// microseconds spent waiting. Errors if `timeout_us` passes first.
    fn wait_for_level(&mut self, level: bool, timeout_us: u32) -> Result<u32, SensorError>;
}

/// DHT11 driver over any `DhtLine` implementation.
pub struct Dht11<L> {
    line: L,
}

impl<L: DhtLine> Dht11<L> {
    pub fn new(line: L) -> Self {
        Self { line }
    }

    /// One full read: handshake, 40-bit frame, checksum, decode.
    ///
    /// The sensor needs >1 s between reads; pacing is the caller's job.
    pub async fn read(&mut self) -> Result<ClimateReading, SensorError> {
        self.line.start_signal().await;
        let raw = self.acquire_frame()?;
        decode(&raw)
    }

    /// Clock in the response preamble and the 40 data bits.
    fn acquire_frame(&mut self) -> Result<[u8; 5], SensorError> {
        // Response preamble: the sensor pulls low ~80 us, then high ~80 us.
        self.line.wait_for_level(false, RESPONSE_TIMEOUT_US)?;
        self.line.wait_for_level(true, PULSE_TIMEOUT_US)?;
        self.line.wait_for_level(false, PULSE_TIMEOUT_US)?;

        let mut raw = [0u8; 5];
        for bit in 0..40 {
            // ~50 us low separator, then the width-coded high pulse.
            self.line.wait_for_level(true, PULSE_TIMEOUT_US)?;
            let width_us = self.line.wait_for_level(false, PULSE_TIMEOUT_US)?;
            if classify_pulse(width_us) {
                raw[bit / 8] |= 0x80 >> (bit % 8);
            }
        }

        Ok(raw)
    }
}

/// Classify one high-pulse width as a data bit.
pub fn classify_pulse(width_us: u32) -> bool {
    width_us > BIT_ONE_THRESHOLD_US
}

/// Decode a 5-byte frame into a reading, verifying the checksum.
///
/// Payload layout: humidity integer/fraction, temperature
/// integer/fraction, checksum (sum of the first four bytes). The
/// fractional bytes carry tenths on the sensor revisions that populate
/// them and zero otherwise; the temperature sign lives in bit 7 of its
/// fractional byte.
pub fn decode(raw: &[u8; 5]) -> Result<ClimateReading, SensorError> {
    let sum = raw[0]
        .wrapping_add(raw[1])
        .wrapping_add(raw[2])
        .wrapping_add(raw[3]);
    if sum != raw[4] {
        return Err(SensorError::Checksum);
    }

    let humidity_x10 = raw[0] as u16 * 10 + (raw[1] & 0x0F) as u16;
    let magnitude = raw[2] as i16 * 10 + (raw[3] & 0x0F) as i16;
    let temp_c_x10 = if raw[3] & 0x80 != 0 {
        -magnitude
    } else {
        magnitude
    };

    Ok(ClimateReading {
        temp_c_x10,
        humidity_x10,
    })
}
