//! Populates a cardtap database with test data for debugging the mobile shells.
//!
//! Run with: `cargo run -q --example seed_profiles -p cardtap_core`

use cardtap_core::store::ProfileStore;
use cardtap_core::types::{
    Config, CustomLink, Profile, ProfileId, Rgba, ShareChannel, ShareDirection, ShareEvent,
};
use std::path::PathBuf;
use std::time::{Duration, SystemTime};

fn main() {
    let base_path = get_default_data_path();
    println!("Using data path: {}", base_path.display());

    let config = Config {
        base_path: base_path.clone(),
    };

    let mut store = ProfileStore::open(config).expect("Failed to open cardtap database");
    let now = SystemTime::now();

    println!("\n[Profiles]");
    seed_profiles(&mut store, now);

    println!("\n[Share History]");
    seed_history(&mut store, now);

    // Summary
    let ids = store.profile_ids().unwrap_or_default();
    let events = store.share_history(100).unwrap_or_default();
    println!(
        "\nDatabase now has {} profiles and {} history events",
        ids.len(),
        events.len()
    );
}

fn seed_profiles(store: &mut ProfileStore, now: SystemTime) {
    let personal_id = ProfileId::try_from("personal").expect("Invalid profile id");
    let mut personal = Profile::new(personal_id.clone(), now);
    personal.name = Some("Alice Example".to_string());
    personal.phone = Some("+1 555 0100".to_string());
    personal.email = Some("alice@example.com".to_string());
    personal
        .socials
        .insert("github".to_string(), "alice".to_string());
    personal.links.push(CustomLink {
        label: "Blog".to_string(),
        url: "https://alice.example.com".to_string(),
    });
    personal.aesthetics.primary_color = Rgba::rgb(0xe8, 0x5d, 0x75);
    personal.aesthetics.background_color = Some(Rgba::rgb(0x12, 0x12, 0x12));
    personal.aesthetics.blur_level = 12;

    let work_id = ProfileId::try_from("work").expect("Invalid profile id");
    let mut work = Profile::new(work_id, now);
    work.name = Some("Alice Example".to_string());
    work.title = Some("Staff Engineer".to_string());
    work.company = Some("Acme Corp".to_string());
    work.website = Some("https://acme.example.com".to_string());

    for profile in [&personal, &work] {
        match store.save(profile, now) {
            Ok(()) => println!("  Created: {}", profile.id),
            Err(e) => println!("  Skipped {} ({})", profile.id, e),
        }
    }

    match store.set_active_profile(&personal_id) {
        Ok(()) => println!("  Active: {}", personal_id),
        Err(e) => println!("  Failed to set active profile ({})", e),
    }
}

fn seed_history(store: &mut ProfileStore, now: SystemTime) {
    let personal = ProfileId::try_from("personal").expect("Invalid profile id");

    let events = [
        ("Ben", ShareDirection::Sent, ShareChannel::Nfc, 3600),
        ("Cho", ShareDirection::Received, ShareChannel::Qr, 1800),
        ("Dee", ShareDirection::Sent, ShareChannel::Qr, 60),
    ];

    for (counterpart, direction, channel, seconds_ago) in events {
        let event = ShareEvent {
            occurred_at: now - Duration::from_secs(seconds_ago),
            direction,
            channel,
            counterpart: Some(counterpart.to_string()),
            profile: personal.clone(),
        };
        match store.record_share(&event) {
            Ok(()) => println!("  Recorded: {} ({:?})", counterpart, channel),
            Err(e) => println!("  Skipped {} ({})", counterpart, e),
        }
    }
}

fn get_default_data_path() -> PathBuf {
    std::env::temp_dir().join("cardtap-seed")
}
