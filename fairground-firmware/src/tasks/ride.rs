//! Top Spin ride task
//!
//! Walks the show script action by action, driving the main-arm and chair
//! motors through their H-bridges. Counted arm rotations and the homing and
//! trimming moves poll the debounced sensor shares; timed moves rely on the
//! physical end-stops, exactly like the rig this replaces.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_time::{Duration, Ticker, Timer};

use fairground_core::ride::{Action, RevolutionCounter, SHOW};
use fairground_core::traits::{Direction, MotorDriver};
use fairground_drivers::motor::HBridge;

use crate::channels::{SensorShare, BASE_SENSOR, SHOW_DONE, SIDE_SENSOR};

/// PWM counter wrap value; compare is the 8-bit duty directly.
pub const PWM_TOP: u16 = 255;

/// Poll interval for sensor waits, matching the sampler period.
const POLL_MS: u64 = 1;

/// Base PWM configuration for a motor channel.
pub fn pwm_config() -> PwmConfig {
    let mut config = PwmConfig::default();
    config.top = PWM_TOP;
    config.compare_a = 0;
    config
}

/// GPIO and PWM outputs of one H-bridge channel.
pub struct MotorPins {
    pub in_a: Output<'static>,
    pub in_b: Output<'static>,
    pub pwm: Pwm<'static>,
}

impl MotorPins {
    /// Push the driver's computed state out to the pins.
    fn apply(&mut self, bridge: &HBridge) {
        // Pin writes are infallible on RP2040 GPIO
        let _ = bridge.apply_direction(&mut self.in_a, &mut self.in_b);

        let mut config = pwm_config();
        config.compare_a = bridge.duty() as u16;
        self.pwm.set_config(&config);
    }
}

/// Ride task - run the show script once, then park
#[embassy_executor::task]
pub async fn ride_task(
    mut arm_pins: MotorPins,
    mut chair_pins: MotorPins,
    mut status_led: Output<'static>,
) {
    info!("Ride task started");

    let mut arm = HBridge::new();
    let mut chair = HBridge::new();
    arm.enable(true);
    chair.enable(true);
    arm_pins.apply(&arm);
    chair_pins.apply(&chair);

    for action in SHOW {
        debug!("Action: {:?}", action);
        match *action {
            Action::RotateArm { dir, turns, duty } => {
                rotate_arm(&mut arm, &mut arm_pins, dir, turns, duty).await;
            }
            Action::NudgeArm { dir, duty, ms } => {
                timed_move(&mut arm, &mut arm_pins, dir, duty, ms).await;
            }
            Action::SpinChair { dir, duty, ms } => {
                timed_move(&mut chair, &mut chair_pins, dir, duty, ms).await;
            }
            Action::Dwell { ms } => {
                Timer::after_millis(ms as u64).await;
            }
            Action::SeekHome => {
                seek_home(&mut arm, &mut arm_pins).await;
            }
            Action::TrimChair => {
                trim_chair(&mut chair, &mut chair_pins, &mut status_led).await;
            }
        }
    }

    info!("Show complete, ride parked");
    SHOW_DONE.signal(());

    // The choreography has ended; there is nothing left to do.
    loop {
        Timer::after_secs(3600).await;
    }
}

/// Start a motor in the given direction at the given duty.
fn start(bridge: &mut HBridge, pins: &mut MotorPins, dir: Direction, duty: u8) {
    bridge.set_direction(dir);
    if let Err(e) = bridge.drive(duty) {
        // The script never commands a zero duty or a disabled motor
        warn!("Motor refused drive command: {:?}", e);
    }
    pins.apply(bridge);
}

/// Stop a motor and push the coast state to its pins.
fn stop(bridge: &mut HBridge, pins: &mut MotorPins) {
    bridge.stop();
    pins.apply(bridge);
}

/// Run a motor for a fixed duration, then stop it.
async fn timed_move(bridge: &mut HBridge, pins: &mut MotorPins, dir: Direction, duty: u8, ms: u16) {
    start(bridge, pins, dir, duty);
    Timer::after_millis(ms as u64).await;
    stop(bridge, pins);
}

/// Rotate the main arm for a number of full revolutions, counted on the
/// side sensor.
async fn rotate_arm(bridge: &mut HBridge, pins: &mut MotorPins, dir: Direction, turns: u8, duty: u8) {
    start(bridge, pins, dir, duty);

    // Clear the tower before counting, in case we start in home position
    Timer::after_millis(200).await;
    SIDE_SENSOR.take_fell();

    let mut counter = RevolutionCounter::new(turns);
    let mut ticker = Ticker::every(Duration::from_millis(POLL_MS));
    loop {
        ticker.next().await;
        if counter.feed(SIDE_SENSOR.level()) {
            break;
        }
    }

    stop(bridge, pins);
    trace!("Arm rotation complete");
}

/// Wait until a sensor share reads the wanted level.
async fn wait_for_level(share: &SensorShare, level: bool) {
    let mut ticker = Ticker::every(Duration::from_millis(POLL_MS));
    while share.level() != level {
        ticker.next().await;
    }
}

/// Return the main arm to its home position against the side sensor.
///
/// One full pass at speed to a known point, then a slow creep backward
/// onto the sensor.
async fn seek_home(bridge: &mut HBridge, pins: &mut MotorPins) {
    debug!("Seeking arm home");

    start(bridge, pins, Direction::Forward, 255);
    wait_for_level(&SIDE_SENSOR, false).await;
    wait_for_level(&SIDE_SENSOR, true).await;
    stop(bridge, pins);

    Timer::after_millis(250).await;

    start(bridge, pins, Direction::Backward, 100);
    wait_for_level(&SIDE_SENSOR, false).await;
    stop(bridge, pins);
}

/// Fine-tune the chair against the base sensor, blinking the status LED
/// to show which branch ran.
async fn trim_chair(bridge: &mut HBridge, pins: &mut MotorPins, status_led: &mut Output<'static>) {
    debug!("Trimming chair");

    if BASE_SENSOR.level() {
        start(bridge, pins, Direction::Forward, 125);
        wait_for_level(&BASE_SENSOR, false).await;
        stop(bridge, pins);
        blink(status_led, 5, 150).await;
    } else {
        start(bridge, pins, Direction::Backward, 200);
        wait_for_level(&BASE_SENSOR, true).await;
        stop(bridge, pins);
        blink(status_led, 4, 350).await;

        start(bridge, pins, Direction::Forward, 150);
        wait_for_level(&BASE_SENSOR, false).await;
        stop(bridge, pins);
    }
}

/// Blink the status LED, ending dark.
async fn blink(led: &mut Output<'static>, repeat: u8, period_ms: u64) {
    for _ in 0..repeat {
        led.set_low();
        Timer::after_millis(period_ms).await;
        led.set_high();
        Timer::after_millis(period_ms).await;
    }
    led.set_low();
}
