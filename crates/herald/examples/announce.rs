//! Example: Announcing focus and hover changes to a screen reader

use herald::a11y::ScreenReaderOutput;
use herald::dom::Document;
use herald::Announcer;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let mut doc = Document::new();
    let mut announcer = Announcer::new();
    announcer.mount(&mut doc);

    let mut reader = ScreenReaderOutput::new();

    // Focus lands on the save button
    announcer.announce(&mut doc, Some("Save button, saves the current draft"));
    reader.observe(&doc);

    // Pointer moves over the delete button
    announcer.announce(&mut doc, Some("Delete button, removes the draft"));
    reader.observe(&doc);

    // Focus leaves the toolbar
    announcer.clear(&mut doc, None);
    reader.observe(&doc);

    while let Some(announcement) = reader.next() {
        println!("[{}] {}", announcement.politeness.as_str(), announcement.text);
    }

    announcer.unmount(&mut doc);
    println!("herald v{} done", herald::VERSION);
}
