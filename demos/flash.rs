use chrono::{DateTime, Local};
use packmap::{Arrayable, Package};

/// Demonstrates the consuming-read protocol with a session flash bag
fn main() {
    let mut session = Session::new();

    // First request: a form submission queues feedback for the next page
    session.flash("notice", "Profile saved");
    session.flash("warning", "Avatar was resized to 512x512");
    println!("Queued {} flash message(s)\n", session.pending());

    // Second request: the page renders once and drains the bag
    println!("RENDERED FLASHES:");
    for line in session.drain() {
        println!("  {}", line);
    }

    // Third request: nothing left to show
    println!("\nAfter render: {} message(s) pending", session.pending());
    println!(
        "Fallback read: {}",
        session.take_or("notice", "nothing queued")
    );
}

#[derive(Clone)]
struct FlashMessage {
    text: String,
    queued_at: DateTime<Local>,
}

struct Session {
    flashes: Package<FlashMessage>,
}

impl Session {
    fn new() -> Self {
        Self {
            flashes: Package::new(),
        }
    }

    fn flash(&mut self, kind: &str, text: &str) {
        self.flashes.pack(
            kind,
            FlashMessage {
                text: text.to_string(),
                queued_at: Local::now(),
            },
        );
    }

    fn pending(&self) -> usize {
        self.flashes.len()
    }

    /// Removes and formats every queued message; a second drain yields nothing
    fn drain(&mut self) -> Vec<String> {
        self.flashes
            .keys()
            .into_iter()
            .filter_map(|key| {
                let message = self.flashes.unpack(key.clone())?;
                Some(format!(
                    "[{}] {}: {}",
                    message.queued_at.format("%H:%M:%S"),
                    key,
                    message.text
                ))
            })
            .collect()
    }

    fn take_or(&mut self, kind: &str, default: &str) -> String {
        self.flashes
            .unpack(kind)
            .map(|message| message.text)
            .unwrap_or_else(|| default.to_string())
    }
}
