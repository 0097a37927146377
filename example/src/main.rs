//! A self-contained demonstration of the bridge with a simulated platform:
//! one thread plays the platform's input dispatch path and types a message
//! through the hook, while the main thread runs a poll-driven loop that
//! collects the characters and toggles the input surface around the
//! exchange. Run with `RUST_LOG=debug` to watch the traffic.

use ::keybridge::{
    bridge::Builder,
    errors::ServiceError,
    input::{InputMethodService, KeyEvent},
};
use ::std::{thread, time::Duration};
use ::tracing::info;
use ::tracing_subscriber::{fmt, prelude::*, EnvFilter};

const MESSAGE: &str = "Hello, bridge!";

/// An input-method service which only reports what it was asked to do.
struct EchoSurface;

impl InputMethodService for EchoSurface {
    fn show(&self) -> Result<(), ServiceError> {
        info!("Input surface shown");
        Ok(())
    }

    fn hide(&self) -> Result<(), ServiceError> {
        info!("Input surface hidden");
        Ok(())
    }
}

pub fn main() {
    ::tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let bridge = Builder::new().with_input_method(EchoSurface).build();
    let hook = bridge.dispatch_hook();

    // Simulated platform input thread: types the message one key at a time,
    // a release following every press.
    let platform = thread::spawn(move || {
        for ch in MESSAGE.chars() {
            hook.dispatch(KeyEvent::down(ch as u32));
            hook.dispatch(KeyEvent::up(ch as u32));
            thread::sleep(Duration::from_millis(20));
        }
    });

    bridge.show_soft_input();

    // The application loop: drain whatever has arrived, then get on with
    // the rest of the frame.
    let mut typed = String::new();
    while typed.chars().count() < MESSAGE.chars().count() {
        typed.extend(bridge.drain_input());
        thread::sleep(Duration::from_millis(5));
    }

    bridge.hide_soft_input();
    platform.join().expect("Platform thread panicked");

    info!(%typed, "Input captured");
}
