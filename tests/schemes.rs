use vcsbank::bus::{CartridgeBus, CartridgePort};
use vcsbank::cartridge::cartridge::Cartridge;
use vcsbank::scheme_list::SchemeId;

// Each byte holds the number of the bank_size bank it's in.
fn insert(scheme_id: SchemeId, size: usize, bank_size: usize) -> CartridgePort {
    let image = (0..size).map(|i| (i / bank_size) as u8).collect();
    let cartridge = Cartridge::from_image(&scheme_id.to_string(), image).unwrap();
    CartridgePort::insert(&cartridge, scheme_id).unwrap()
}

#[test]
fn f6_starts_in_the_last_bank() {
    let mut port = insert(SchemeId::F6, 16 * 1024, 4 * 1024);
    assert_eq!(port.peek(0x1000), 3);
    port.peek(0x1FF7);
    assert_eq!(port.peek(0x1000), 1);
    // Mirror of $1FF6.
    port.poke(0x3FF6, 0);
    assert_eq!(port.peek(0x1000), 0);
}

#[test]
fn f8sc_ram() {
    let mut port = insert(SchemeId::F8SC, 8 * 1024, 4 * 1024);
    for i in 0..128 {
        assert!(port.poke(0x1000 + i, i as u8));
    }

    port.peek(0x1FF8);
    for i in 0..128 {
        assert_eq!(port.peek(0x1080 + i), i as u8, "RAM is shared by every bank.");
    }

    assert_eq!(port.peek(0x1100), 0);
}

#[test]
fn e0_slots() {
    let mut port = insert(SchemeId::E0, 8 * 1024, 1024);
    assert_eq!(port.bank_string(), "4 5 6 7");

    port.peek(0x1FE2);
    port.peek(0x1FEB);
    port.poke(0x1FF1, 0);
    assert_eq!(port.bank_string(), "2 3 1 7");
    assert_eq!(port.peek(0x1000), 2);
    assert_eq!(port.peek(0x1400), 3);
    assert_eq!(port.peek(0x1800), 1);
    assert_eq!(port.peek(0x1C00), 7);
}

#[test]
fn e7_rom_and_ram() {
    let mut port = insert(SchemeId::E7, 16 * 1024, 2 * 1024);
    assert_eq!(port.peek(0x1400), 0);
    assert_eq!(port.peek(0x1A00), 7);

    port.peek(0x1FE3);
    assert_eq!(port.peek(0x1000), 3);

    // The 1K RAM bank replaces the ROM in the lower slot.
    port.peek(0x1FE7);
    assert!(port.poke(0x1000, 0x11));
    assert_eq!(port.peek(0x1400), 0x11);

    assert!(port.poke(0x1800, 0x22));
    assert_eq!(port.peek(0x1900), 0x22);
    port.peek(0x1FE9);
    assert_eq!(port.peek(0x1900), 0x00);
    port.peek(0x1FE8);
    assert_eq!(port.peek(0x1900), 0x22);
}

#[test]
fn tigervision_3f() {
    let mut port = insert(SchemeId::ThreeF, 8 * 1024, 2 * 1024);
    assert_eq!(port.peek(0x1800), 3);

    port.poke(0x003F, 2);
    assert_eq!(port.peek(0x1000), 2);
    port.poke(0x0010, 1);
    assert_eq!(port.peek(0x1000), 1);

    // Neither reads of the hotspots nor writes above them switch.
    port.peek(0x003F);
    port.poke(0x0040, 3);
    assert_eq!(port.current_bank(), 1);
}

#[test]
fn tigervision_3e_ram() {
    let mut port = insert(SchemeId::ThreeE, 8 * 1024, 2 * 1024);
    port.poke(0x003E, 0);
    assert!(port.poke(0x1400, 0x33));
    assert_eq!(port.peek(0x1000), 0x33);

    port.poke(0x003E, 5);
    assert_eq!(port.peek(0x1000), 0x00);

    port.poke(0x003F, 1);
    assert_eq!(port.peek(0x1000), 1);
    assert!(!port.poke(0x1400, 0x44));
}

#[test]
fn activision_fe() {
    let mut port = insert(SchemeId::FE, 8 * 1024, 4 * 1024);
    assert_eq!(port.peek(0x1000), 0);

    // JSR pushes the return address, then the target's high byte comes across the bus.
    port.observe_write(0x01FE, 0x12);
    port.observe_write(0x01FF, 0xD0);
    assert_eq!(port.peek(0x1000), 1);

    port.observe_read(0x01FE, 0x00);
    port.observe_read(0x01FF, 0xF0);
    assert_eq!(port.peek(0x1000), 0);
}

#[test]
fn ua_and_its_swapped_twin() {
    let mut ua = insert(SchemeId::UA, 8 * 1024, 4 * 1024);
    ua.peek(0x0240);
    assert_eq!(ua.peek(0x1000), 1);
    ua.poke(0x0220, 0);
    assert_eq!(ua.peek(0x1000), 0);

    let mut swapped = insert(SchemeId::UASW, 8 * 1024, 4 * 1024);
    swapped.peek(0x0220);
    assert_eq!(swapped.peek(0x1000), 1);
}

#[test]
fn mdm_locks_above_bank_127() {
    let mut port = insert(SchemeId::MDM, 256 * 1024, 4 * 1024);
    port.peek(0x0803);
    assert_eq!(port.peek(0x1000), 3);
    assert!(!port.banking_locked());

    port.peek(0x08C0);
    assert!(port.banking_locked());
    assert_eq!(port.current_bank(), 0);
    port.peek(0x0805);
    assert_eq!(port.current_bank(), 0);

    port.reset();
    assert!(!port.banking_locked());
    port.peek(0x0805);
    assert_eq!(port.current_bank(), 5);
}

#[test]
fn save_state_restores_every_scheme_field() {
    let mut port = insert(SchemeId::E7, 16 * 1024, 2 * 1024);
    port.peek(0x1FE7);
    port.poke(0x1000, 0xAA);
    port.peek(0x1FEA);
    port.poke(0x1800, 0xBB);
    let state = port.save_state();
    let banks = port.bank_string();

    port.peek(0x1FE0);
    port.peek(0x1FE8);
    port.poke(0x1800, 0xCC);
    port.load_state(&state).unwrap();

    assert_eq!(port.bank_string(), banks);
    assert_eq!(port.peek(0x1400), 0xAA);
    assert_eq!(port.peek(0x1900), 0xBB);
}

#[test]
fn every_tag_round_trips_through_its_name() {
    use strum::IntoEnumIterator;

    for scheme_id in SchemeId::iter() {
        let parsed: SchemeId = scheme_id.to_string().to_lowercase().parse().unwrap();
        assert_eq!(parsed, scheme_id);
    }
}
