use log::info;
use strum_macros::Display;

use crate::cartridge::cartridge::Cartridge;
use crate::cartridge::properties_db::PropertiesDb;
use crate::scheme::Scheme;
use crate::scheme_list::{lookup_scheme, parse_scheme_id, LookupError, SchemeId};
use crate::util::unit::KIBIBYTE;

#[derive(PartialEq, Eq, Clone, Copy, Debug, Display)]
pub enum DetectionSource {
    #[strum(to_string = "properties database")]
    Properties,
    #[strum(to_string = "file extension")]
    Extension,
    #[strum(to_string = "image contents")]
    Heuristics,
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Detection {
    pub scheme_id: SchemeId,
    pub source: DetectionSource,
}

// The properties database wins, then an extension naming a scheme (e.g. "game.F8"), then
// whatever the image itself looks like.
pub fn detect(cartridge: &Cartridge, properties: &PropertiesDb) -> Result<Detection, LookupError> {
    let detection = if let Some(scheme_id) = properties.scheme_for(cartridge.crc32()) {
        Detection { scheme_id, source: DetectionSource::Properties }
    } else if let Some(scheme_id) = cartridge.extension().and_then(|ext| parse_scheme_id(ext).ok()) {
        Detection { scheme_id, source: DetectionSource::Extension }
    } else {
        let scheme_id = detect_from_image(cartridge.image().as_slice())
            .ok_or_else(|| LookupError::UnknownCartridgeVariant(format!("{} byte image", cartridge.size())))?;
        Detection { scheme_id, source: DetectionSource::Heuristics }
    };

    info!(target: "detection", "{} detected as {} from the {}.", cartridge.name(), detection.scheme_id, detection.source);
    Ok(detection)
}

// A known tag always wins over the image contents, and is never replaced by a guess when it
// doesn't name a supported scheme.
pub fn identify(image: &[u8], known_signature: Option<&str>) -> Result<Box<dyn Scheme>, LookupError> {
    let scheme_id = match known_signature {
        Some(tag) => parse_scheme_id(tag)?,
        None => detect_from_image(image)
            .ok_or_else(|| LookupError::UnknownCartridgeVariant(format!("{} byte image", image.len())))?,
    };

    lookup_scheme(scheme_id)
}

pub fn detect_from_image(image: &[u8]) -> Option<SchemeId> {
    use SchemeId::*;

    const K: usize = KIBIBYTE as usize;
    let size = image.len();
    let scheme_id = match size {
        0 => return None,
        1..=2048 if is_probably_cv(image) => CV,
        1..=2048 => TwoK,
        4096 if is_probably_superchip(image) => FourKSC,
        4096 if is_probably_cv(image) => CV,
        4096 => FourK,
        8192 if is_probably_superchip(image) => F8SC,
        8192 if is_probably_3e(image) => ThreeE,
        8192 if is_probably_3f(image) => ThreeF,
        8192 if is_probably_e0(image) => E0,
        8192 if is_probably_e7(image) => E78K,
        8192 if is_probably_fe(image) => FE,
        8192 if is_probably_ua(image) => UA,
        8192 if is_probably_0840(image) => Econo0840,
        8192 => F8,
        _ if size == 12 * K => FA,
        _ if size == 16 * K && is_probably_superchip(image) => F6SC,
        _ if size == 16 * K && is_probably_e7(image) => E7,
        _ if size == 16 * K && is_probably_3e(image) => ThreeE,
        _ if size == 16 * K && is_probably_3f(image) => ThreeF,
        _ if size == 16 * K => F6,
        _ if size == 24 * K || size == 28 * K || size == 29 * K => FA2,
        _ if size == 32 * K && is_probably_superchip(image) => F4SC,
        _ if size == 32 * K && is_probably_3e(image) => ThreeE,
        _ if size == 32 * K && is_probably_3f(image) => ThreeF,
        _ if size == 32 * K => F4,
        _ if size == 64 * K && is_probably_3e(image) => ThreeE,
        _ if size == 64 * K && is_probably_3f(image) => ThreeF,
        _ if size == 64 * K && contains(image, b"EFSC") => EFSC,
        _ if size == 64 * K && (contains(image, b"EFEF") || is_probably_ef(image)) =>
            if is_probably_superchip(image) { EFSC } else { EF },
        _ if size == 64 * K && is_probably_x07(image) => X07,
        _ if size == 64 * K => F0,
        _ if size >= 128 * K && size % (4 * K) == 0 && is_probably_mdm(image) => MDM,
        _ if size == 128 * K && contains(image, b"DFSC") => DFSC,
        _ if size == 128 * K && contains(image, b"DFDF") => DF,
        _ if size == 256 * K && contains(image, b"BFSC") => BFSC,
        _ if size == 256 * K && contains(image, b"BFBF") => BF,
        _ if (size == 128 * K || size == 256 * K) && is_probably_sb(image) => SB,
        _ if size == 512 * K && is_probably_3e(image) => ThreeE,
        // A 512K image holds several STA $3F pairs by chance, so 3F is never guessed here.
        _ if size == 512 * K => TVBoy,
        _ if size % (2 * K) == 0 && size < 512 * K && is_probably_3e(image) => ThreeE,
        _ if size % (2 * K) == 0 && size < 512 * K && is_probably_3f(image) => ThreeF,
        _ => return None,
    };

    Some(scheme_id)
}

fn count(image: &[u8], signature: &[u8]) -> usize {
    image.windows(signature.len()).filter(|window| *window == signature).count()
}

fn contains(image: &[u8], signature: &[u8]) -> bool {
    image.windows(signature.len()).any(|window| window == signature)
}

fn contains_any(image: &[u8], signatures: &[&[u8]]) -> bool {
    signatures.iter().any(|signature| contains(image, signature))
}

// The Superchip's RAM write port reads back whatever is on the bus, so dumps of it contain
// the same 128 bytes twice at the start of every 4K bank.
fn is_probably_superchip(image: &[u8]) -> bool {
    image.len() % (4 * KIBIBYTE as usize) == 0
        && image.chunks_exact(4 * KIBIBYTE as usize).all(|bank| bank[0..128] == bank[128..256])
}

fn is_probably_3f(image: &[u8]) -> bool {
    // STA $3F
    count(image, &[0x85, 0x3F]) >= 2
}

fn is_probably_3e(image: &[u8]) -> bool {
    // STA $3E ; LDA #$00
    contains(image, &[0x85, 0x3E, 0xA9, 0x00])
}

fn is_probably_e0(image: &[u8]) -> bool {
    contains_any(image, &[
        &[0x8D, 0xE0, 0x1F], // STA $1FE0
        &[0x8D, 0xE0, 0x5F], // STA $5FE0
        &[0x8D, 0xE9, 0xFF], // STA $FFE9
        &[0x0C, 0xE0, 0x1F], // NOP $1FE0
        &[0xAD, 0xE0, 0x1F], // LDA $1FE0
        &[0xAD, 0xE9, 0xFF], // LDA $FFE9
        &[0xAD, 0xED, 0xFF], // LDA $FFED
        &[0xAD, 0xF3, 0xBF], // LDA $BFF3
    ])
}

fn is_probably_e7(image: &[u8]) -> bool {
    contains_any(image, &[
        &[0xAD, 0xE2, 0xFF], // LDA $FFE2
        &[0xAD, 0xE5, 0xFF], // LDA $FFE5
        &[0xAD, 0xE5, 0x1F], // LDA $1FE5
        &[0xAD, 0xE7, 0x1F], // LDA $1FE7
        &[0x0C, 0xE7, 0x1F], // NOP $1FE7
        &[0x8D, 0xE7, 0xFF], // STA $FFE7
        &[0x8D, 0xE7, 0x1F], // STA $1FE7
    ])
}

fn is_probably_fe(image: &[u8]) -> bool {
    contains_any(image, &[
        &[0x20, 0x00, 0xD0, 0xC6, 0xC5], // JSR $D000 ; DEC $C5
        &[0x20, 0xC3, 0xF8, 0xA5, 0x82], // JSR $F8C3 ; LDA $82
        &[0xD0, 0xFB, 0x20, 0x73, 0xFE], // BNE $FB ; JSR $FE73
        &[0x20, 0x00, 0xF0, 0x84, 0xD6], // JSR $F000 ; STY $D6
    ])
}

fn is_probably_ua(image: &[u8]) -> bool {
    contains_any(image, &[
        &[0x8D, 0x40, 0x02], // STA $240
        &[0xAD, 0x40, 0x02], // LDA $240
        &[0xBD, 0x1F, 0x02], // LDA $21F,X
    ])
}

fn is_probably_cv(image: &[u8]) -> bool {
    contains_any(image, &[
        &[0x9D, 0xFF, 0xF3], // STA $F3FF,X
        &[0x99, 0x00, 0xF4], // STA $F400,Y
    ])
}

fn is_probably_ef(image: &[u8]) -> bool {
    contains_any(image, &[
        &[0x0C, 0xE0, 0x1F], // NOP $1FE0
        &[0xAD, 0xE0, 0x1F], // LDA $1FE0
        &[0x0C, 0xE0, 0x5F], // NOP $5FE0
        &[0x0C, 0xE0, 0x7F], // NOP $7FE0
    ])
}

fn is_probably_sb(image: &[u8]) -> bool {
    contains_any(image, &[
        &[0xBD, 0x00, 0x08], // LDA $0800,X
        &[0xAD, 0x00, 0x08], // LDA $0800
    ])
}

fn is_probably_0840(image: &[u8]) -> bool {
    contains_any(image, &[
        &[0xAD, 0x00, 0x08], // LDA $0800
        &[0xAD, 0x40, 0x08], // LDA $0840
        &[0x2C, 0x00, 0x08], // BIT $0800
    ]) || contains_any(image, &[
        &[0x0C, 0x00, 0x08, 0x4C], // NOP $0800 ; JMP ...
        &[0x0C, 0xFF, 0x0F, 0x4C], // NOP $0FFF ; JMP ...
    ])
}

fn is_probably_x07(image: &[u8]) -> bool {
    // LDA $08xD, the bank being the x.
    image.windows(3).any(|w| w[0] == 0xAD && w[1] & 0x0F == 0x0D && w[2] == 0x08)
}

fn is_probably_mdm(image: &[u8]) -> bool {
    contains(&image[..std::cmp::min(image.len(), 8 * KIBIBYTE as usize)], b"MDMC")
}

#[cfg(test)]
mod tests {
    use super::*;

    const K: usize = KIBIBYTE as usize;

    // Filler that matches no signature and isn't a Superchip dump.
    fn blank(size: usize) -> Vec<u8> {
        (0..size).map(|i| if i % 256 < 128 { 0xEA } else { 0x60 }).collect()
    }

    fn with_signature(size: usize, offset: usize, signature: &[u8]) -> Vec<u8> {
        let mut image = blank(size);
        image[offset..offset + signature.len()].copy_from_slice(signature);
        image
    }

    // Xorshift bytes. Like real code, these contain the odd STA $3F pair by chance.
    fn noise(size: usize, mut seed: u32) -> Vec<u8> {
        (0..size).map(|_| {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            seed as u8
        }).collect()
    }

    #[test]
    fn plain_sizes() {
        assert_eq!(detect_from_image(&blank(2 * K)), Some(SchemeId::TwoK));
        assert_eq!(detect_from_image(&blank(K)), Some(SchemeId::TwoK));
        assert_eq!(detect_from_image(&blank(4 * K)), Some(SchemeId::FourK));
        assert_eq!(detect_from_image(&blank(8 * K)), Some(SchemeId::F8));
        assert_eq!(detect_from_image(&blank(12 * K)), Some(SchemeId::FA));
        assert_eq!(detect_from_image(&blank(16 * K)), Some(SchemeId::F6));
        assert_eq!(detect_from_image(&blank(28 * K)), Some(SchemeId::FA2));
        assert_eq!(detect_from_image(&blank(32 * K)), Some(SchemeId::F4));
        assert_eq!(detect_from_image(&blank(64 * K)), Some(SchemeId::F0));
        assert_eq!(detect_from_image(&blank(512 * K)), Some(SchemeId::TVBoy));
    }

    #[test]
    fn unknown_sizes_are_not_guessed() {
        assert_eq!(detect_from_image(&[]), None);
        assert_eq!(detect_from_image(&blank(6 * K)), None);
        assert_eq!(detect_from_image(&blank(1000 * K)), None);
    }

    #[test]
    fn superchip() {
        let mut image = blank(8 * K);
        for bank in image.chunks_exact_mut(4 * K) {
            bank[128..256].fill(0xEA);
        }
        assert_eq!(detect_from_image(&image), Some(SchemeId::F8SC));
    }

    #[test]
    fn tigervision() {
        let mut image = with_signature(8 * K, 0x100, &[0x85, 0x3F]);
        assert_eq!(detect_from_image(&image), Some(SchemeId::F8), "One STA $3F isn't enough.");
        image[0x200..0x202].copy_from_slice(&[0x85, 0x3F]);
        assert_eq!(detect_from_image(&image), Some(SchemeId::ThreeF));

        let image = with_signature(32 * K, 0x300, &[0x85, 0x3E, 0xA9, 0x00]);
        assert_eq!(detect_from_image(&image), Some(SchemeId::ThreeE));
    }

    #[test]
    fn eight_kibibyte_signatures() {
        assert_eq!(detect_from_image(&with_signature(8 * K, 10, &[0x8D, 0xE0, 0x1F])), Some(SchemeId::E0));
        assert_eq!(detect_from_image(&with_signature(8 * K, 10, &[0xAD, 0xE5, 0xFF])), Some(SchemeId::E78K));
        assert_eq!(detect_from_image(&with_signature(8 * K, 10, &[0x20, 0x00, 0xD0, 0xC6, 0xC5])), Some(SchemeId::FE));
        assert_eq!(detect_from_image(&with_signature(8 * K, 10, &[0x8D, 0x40, 0x02])), Some(SchemeId::UA));
        assert_eq!(detect_from_image(&with_signature(8 * K, 10, &[0x2C, 0x00, 0x08])), Some(SchemeId::Econo0840));
    }

    #[test]
    fn commavid() {
        assert_eq!(detect_from_image(&with_signature(2 * K, 10, &[0x9D, 0xFF, 0xF3])), Some(SchemeId::CV));
    }

    #[test]
    fn large_images() {
        assert_eq!(detect_from_image(&with_signature(64 * K, 0xFF8, b"EFEF")), Some(SchemeId::EF));
        assert_eq!(detect_from_image(&with_signature(128 * K, 0xFF8, b"DFSC")), Some(SchemeId::DFSC));
        assert_eq!(detect_from_image(&with_signature(256 * K, 0xFF8, b"BFBF")), Some(SchemeId::BF));
        assert_eq!(detect_from_image(&with_signature(128 * K, 0x20, &[0xAD, 0x00, 0x08])), Some(SchemeId::SB));
        assert_eq!(detect_from_image(&with_signature(256 * K, 0xFF0, b"MDMC")), Some(SchemeId::MDM));
        assert_eq!(detect_from_image(&with_signature(64 * K, 0x40, &[0xAD, 0x2D, 0x08])), Some(SchemeId::X07));
    }

    #[test]
    fn chance_sta_3f_pairs_dont_hide_tvboy_or_sb() {
        for seed in 1..=8 {
            let image = noise(512 * K, seed);
            assert!(count(&image, &[0x85, 0x3F]) >= 2);
            assert_eq!(detect_from_image(&image), Some(SchemeId::TVBoy), "seed {seed}");
        }

        let mut image = noise(128 * K, 5);
        assert!(count(&image, &[0x85, 0x3F]) >= 2);
        image[0x20..0x23].copy_from_slice(&[0xAD, 0x00, 0x08]);
        assert_eq!(detect_from_image(&image), Some(SchemeId::SB));
    }

    #[test]
    fn tigervision_3e_at_512k() {
        let image = with_signature(512 * K, 0x300, &[0x85, 0x3E, 0xA9, 0x00]);
        assert_eq!(detect_from_image(&image), Some(SchemeId::ThreeE));
    }

    #[test]
    fn unrecognized_large_images_are_errors() {
        assert_eq!(detect_from_image(&blank(128 * K)), None);
    }

    #[test]
    fn identify_prefers_the_known_signature() {
        let scheme = identify(&blank(512 * K), Some("tvboy")).unwrap();
        assert_eq!(scheme.layout().rom_max_size(), 512 * KIBIBYTE);

        let scheme = identify(&blank(8 * K), None).unwrap();
        assert_eq!(scheme.layout().rom_bank_size(), 4 * KIBIBYTE);

        assert!(matches!(identify(&blank(8 * K), Some("F9")), Err(LookupError::UnknownCartridgeVariant(_))));
        assert_eq!(
            identify(&blank(8 * K), Some("DPC")).err(),
            Some(LookupError::UnsupportedCartridgeVariant(SchemeId::DPC)),
        );
    }

    #[test]
    fn properties_beat_extension_beats_contents() {
        let mut cartridge = Cartridge::from_image("tvboy", blank(8 * K)).unwrap();
        let empty = PropertiesDb::empty();
        assert_eq!(detect(&cartridge, &empty).unwrap(), Detection { scheme_id: SchemeId::F8, source: DetectionSource::Heuristics });

        let properties = PropertiesDb::parse(&format!(
            r#"<properties><cart crc32="{:08X}" type="UA"/></properties>"#,
            cartridge.crc32(),
        )).unwrap();
        assert_eq!(detect(&cartridge, &properties).unwrap().scheme_id, SchemeId::UA);

        cartridge = Cartridge::from_image("not-a-file", blank(6 * K)).unwrap();
        assert_eq!(
            detect(&cartridge, &empty),
            Err(LookupError::UnknownCartridgeVariant("6144 byte image".to_owned())),
        );
    }
}
