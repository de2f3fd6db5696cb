//! Controls Example - discover controller button indices
//!
//! Live view of connected game controllers: press any button and read
//! off the exact `"name"`/`"button"` pair to paste into a document's
//! `controls` section.
//!
//! Run with: cargo run --example controls

#[cfg(target_os = "linux")]
fn main() {
    use std::io::Write;

    use checklist_tui::input::evdev::EvdevPoller;
    use checklist_tui::input::{DeviceHelper, DevicePoller, HELPER_TICK};

    let mut poller = EvdevPoller::open();
    let mut helper = DeviceHelper::new();

    println!("Watching for controller input - press buttons to identify them.");
    println!("Ctrl+C to quit.\n");

    let mut last_display = String::new();
    let mut ticks = 0u32;

    loop {
        // Re-enumerate once a second so hotplugged pads show up
        if ticks % 10 == 0 {
            poller.refresh();
        }
        ticks += 1;

        let devices = helper.tick(&poller.poll());

        let mut display = String::new();
        if devices.is_empty() {
            display.push_str("No game devices detected. Connect a controller and press any button.\n");
        }
        for device in &devices {
            display.push_str(&format!(
                "Device {}: {} ({} buttons, {} axes)\n",
                device.index, device.id, device.button_count, device.axis_count
            ));
            let held: Vec<String> = device
                .pressed
                .iter()
                .enumerate()
                .filter(|&(_, &down)| down)
                .map(|(i, _)| i.to_string())
                .collect();
            if !held.is_empty() {
                display.push_str(&format!("  held: {}\n", held.join(" ")));
            }
            if let Some(hint) = device.binding_hint() {
                display.push_str(&format!("  last touched: {hint}\n"));
            }
        }

        if display != last_display {
            print!("\x1b[2J\x1b[H{display}");
            std::io::stdout().flush().ok();
            last_display = display;
        }

        std::thread::sleep(HELPER_TICK);
    }
}

#[cfg(not(target_os = "linux"))]
fn main() {
    eprintln!("controller discovery is only available on Linux (evdev)");
}
