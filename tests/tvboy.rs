use vcsbank::bus::{CartridgeBus, CartridgePort};
use vcsbank::cartridge::cartridge::Cartridge;
use vcsbank::cartridge::properties_db::PropertiesDb;
use vcsbank::cartridge::scheme_detector::{self, DetectionSource};
use vcsbank::scheme_list::SchemeId;

const BANK_SIZE: usize = 4 * 1024;

// Each byte holds the number of its bank.
fn tvboy(bank_count: usize) -> CartridgePort {
    let image = (0..bank_count * BANK_SIZE).map(|i| (i / BANK_SIZE) as u8).collect();
    let cartridge = Cartridge::from_image("tvboy", image).unwrap();
    CartridgePort::insert(&cartridge, SchemeId::TVBoy).unwrap()
}

#[test]
fn power_on_state() {
    let port = tvboy(8);
    assert_eq!(port.current_bank(), 0);
    assert!(!port.banking_locked());
    assert_eq!(port.bank_count(), 8);
}

#[test]
fn first_switch_locks() {
    let mut port = tvboy(8);
    port.peek(0x1804);
    assert_eq!(port.current_bank(), 4);
    assert!(port.banking_locked());

    port.peek(0x1802);
    assert_eq!(port.current_bank(), 4);
    assert_eq!(port.peek(0x1000), 4);
}

#[test]
fn selecting_the_menu_does_not_lock() {
    let mut port = tvboy(8);
    port.peek(0x1800);
    assert_eq!(port.current_bank(), 0);
    assert!(!port.banking_locked());

    port.poke(0x1805, 0x00);
    assert_eq!(port.current_bank(), 5);
    assert!(port.banking_locked());
}

#[test]
fn locked_state_survives_a_save_state() {
    let mut port = tvboy(8);
    port.peek(0x1803);
    let state = port.save_state();

    let mut restored = tvboy(8);
    restored.load_state(&state).unwrap();
    assert_eq!(restored.current_bank(), 3);
    assert!(restored.banking_locked());

    for address in [0x1800, 0x1801, 0x1807, 0x187F] {
        port.peek(address);
        restored.peek(address);
        assert_eq!(restored.current_bank(), port.current_bank());
        assert_eq!(restored.current_bank(), 3);
    }
}

#[test]
fn accesses_outside_the_window_do_nothing() {
    let mut port = tvboy(8);
    for address in (0x1000..0x1800).chain(0x1880..0x2000).step_by(7) {
        port.peek(address);
        port.poke(address, 0xFF);
    }

    assert_eq!(port.current_bank(), 0);
    assert!(!port.banking_locked());
}

#[test]
fn mirrored_hotspots() {
    let mut port = tvboy(128);
    port.peek(0xF87F);
    assert_eq!(port.current_bank(), 127);
    assert_eq!(port.peek(0x1FFF), 127);
}

#[test]
fn reset_keeps_the_game_selected() {
    let mut port = tvboy(8);
    port.peek(0x1806);
    port.reset();
    assert_eq!(port.current_bank(), 6);
    assert!(port.banking_locked());
}

#[test]
fn full_size_image_is_detected() {
    // Xorshift filler, which holds several chance STA $3F pairs at this size.
    let mut seed: u32 = 3;
    let image = (0..512 * 1024).map(|_| {
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;
        seed as u8
    }).collect();
    let cartridge = Cartridge::from_image("tvboy", image).unwrap();
    let detection = scheme_detector::detect(&cartridge, &PropertiesDb::empty()).unwrap();
    assert_eq!(detection.scheme_id, SchemeId::TVBoy);
    assert_eq!(detection.source, DetectionSource::Heuristics);
}

#[test]
fn too_big_for_tvboy() {
    let cartridge = Cartridge::from_image("huge", vec![0; 1024 * 1024]).unwrap();
    assert!(CartridgePort::insert(&cartridge, SchemeId::TVBoy).is_err());
}
