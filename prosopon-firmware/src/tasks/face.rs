//! Face render task
//!
//! Owns the OLED and drives the animation engine at ~20 Hz. The engine
//! sees time only as the millisecond tick passed into update/draw, so
//! this task is the single logical thread of control the engine requires.

use defmt::*;
use embassy_stm32::i2c::I2c;
use embassy_stm32::mode::Async;
use embassy_time::{Duration, Instant, Ticker};

use prosopon_core::face::FacePool;
use prosopon_display::{FrameBuffer, Ssd1306};

/// Frame period (~20 Hz)
const FRAME_INTERVAL_MS: u64 = 50;

#[embassy_executor::task]
pub async fn face_task(i2c: I2c<'static, Async>) {
    info!("Face task started");

    let mut display = Ssd1306::new(i2c);
    if display.init().await.is_err() {
        error!("OLED init failed, face task idle");
        return;
    }
    info!("OLED initialized");

    let mut frame = FrameBuffer::new();
    let mut faces: FacePool<1> = FacePool::new();
    let Some(face) = faces.create() else {
        error!("Face pool exhausted");
        return;
    };

    let boot = Instant::now();
    faces.init(face, now_ms(boot));

    let mut ticker = Ticker::every(Duration::from_millis(FRAME_INTERVAL_MS));
    loop {
        let now = now_ms(boot);
        faces.update(face, now);

        frame.clear();
        faces.draw(face, &mut frame, now);

        if display.flush(&frame).await.is_err() {
            // One dropped frame self-corrects on the next tick.
            warn!("Display flush failed");
        }

        ticker.next().await;
    }
}

/// Milliseconds since boot, truncated to the engine's 32-bit tick.
fn now_ms(boot: Instant) -> u32 {
    boot.elapsed().as_millis() as u32
}
