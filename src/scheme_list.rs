use strum_macros::{Display, EnumIter, EnumString};
use thiserror::Error;

use crate::scheme::Scheme;
use crate::schemes as s;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum LookupError {
    #[error("Unknown cartridge type '{0}'.")]
    UnknownCartridgeVariant(String),
    #[error("Cartridge type {0} is recognized but not supported.")]
    UnsupportedCartridgeVariant(SchemeId),
    #[error("A {size} byte image doesn't fit this cartridge type: expected {expected}.")]
    ImageSizeMismatch { size: u32, expected: String },
}

pub enum LookupResult {
    Supported(Box<dyn Scheme>),
    // Cartridges with a coprocessor, tape loader, or audio chip on board.
    Unsupported,
}

#[allow(clippy::upper_case_acronyms)]
#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy, Debug, Display, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum SchemeId {
    #[strum(to_string = "2K")]
    TwoK,
    #[strum(to_string = "4K")]
    FourK,
    #[strum(to_string = "4KSC")]
    FourKSC,
    F8,
    F8SC,
    F6,
    F6SC,
    F4,
    F4SC,
    EF,
    EFSC,
    DF,
    DFSC,
    BF,
    BFSC,
    FA,
    FA2,
    F0,
    E0,
    E7,
    E78K,
    #[strum(to_string = "3F")]
    ThreeF,
    #[strum(to_string = "3E")]
    ThreeE,
    FE,
    UA,
    UASW,
    #[strum(to_string = "0840")]
    Econo0840,
    #[strum(to_string = "0FA0")]
    Fotomania0FA0,
    SB,
    X07,
    MDM,
    CV,
    #[strum(to_string = "TVBOY")]
    TVBoy,

    // Supercharger
    AR,
    DPC,
    #[strum(to_string = "DPC+")]
    DPCPlus,
    CDFJ,
    BUS,
    CM,
    CTY,
    FC,
    WD,
    #[strum(to_string = "4A50")]
    FourA50,
    #[strum(to_string = "3E+")]
    ThreeEPlus,
}

pub fn parse_scheme_id(tag: &str) -> Result<SchemeId, LookupError> {
    tag.trim().parse()
        .map_err(|_| LookupError::UnknownCartridgeVariant(tag.to_owned()))
}

pub fn lookup_scheme(id: SchemeId) -> Result<Box<dyn Scheme>, LookupError> {
    match try_lookup_scheme(id) {
        LookupResult::Supported(scheme) => Ok(scheme),
        LookupResult::Unsupported => Err(LookupError::UnsupportedCartridgeVariant(id)),
    }
}

pub fn try_lookup_scheme(id: SchemeId) -> LookupResult {
    use LookupResult::*;
    use SchemeId::*;
    match id {
        // Unbanked
        TwoK => s::cart_2k::CART_2K.supported(),
        FourK => s::cart_4k::CART_4K.supported(),
        FourKSC => s::cart_4k::CART_4KSC.supported(),

        // Atari standard
        F8 => s::cart_f8::CART_F8.supported(),
        F8SC => s::cart_f8::CART_F8SC.supported(),
        F6 => s::cart_f6::CART_F6.supported(),
        F6SC => s::cart_f6::CART_F6SC.supported(),
        F4 => s::cart_f4::CART_F4.supported(),
        F4SC => s::cart_f4::CART_F4SC.supported(),
        EF => s::cart_ef::CART_EF.supported(),
        EFSC => s::cart_ef::CART_EFSC.supported(),
        DF => s::cart_df::CART_DF.supported(),
        DFSC => s::cart_df::CART_DFSC.supported(),
        BF => s::cart_bf::CART_BF.supported(),
        BFSC => s::cart_bf::CART_BFSC.supported(),

        // CBS RAM Plus
        FA => s::cart_fa::CART_FA.supported(),
        FA2 => s::cart_fa2::CartFa2.supported(),
        // Dynacom Megaboy
        F0 => s::cart_f0::CartF0.supported(),
        // Parker Brothers
        E0 => s::cart_e0::CART_E0.supported(),
        // M-Network
        E7 => s::cart_e7::CART_E7.supported(),
        E78K => s::cart_e7::CART_E78K.supported(),
        // Tigervision
        ThreeF => s::cart_3f::Cart3f.supported(),
        ThreeE => s::cart_3e::Cart3e.supported(),
        // Activision
        FE => s::cart_fe::CartFe::default().supported(),
        // UA Limited
        UA => s::cart_ua::CART_UA.supported(),
        UASW => s::cart_ua::CART_UASW.supported(),
        Econo0840 => s::cart_0840::CART_0840.supported(),
        Fotomania0FA0 => s::cart_0fa0::CART_0FA0.supported(),
        // Superbank
        SB => s::cart_sb::CartSb.supported(),
        X07 => s::cart_x07::CartX07.supported(),
        // Menu Driven Megacart
        MDM => s::cart_mdm::CartMdm::default().supported(),
        // Commavid
        CV => s::cart_cv::CartCv.supported(),
        TVBoy => s::cart_tvboy::CartTvBoy::default().supported(),

        AR | DPC | DPCPlus | CDFJ | BUS | CM | CTY | FC | WD | FourA50 | ThreeEPlus => Unsupported,
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn tags_parse_case_insensitively() {
        assert_eq!(parse_scheme_id("f8sc"), Ok(SchemeId::F8SC));
        assert_eq!(parse_scheme_id("TVBoy"), Ok(SchemeId::TVBoy));
        assert_eq!(parse_scheme_id("3e"), Ok(SchemeId::ThreeE));
        assert_eq!(parse_scheme_id("dpc+"), Ok(SchemeId::DPCPlus));
        assert_eq!(parse_scheme_id(" 0840 "), Ok(SchemeId::Econo0840));
    }

    #[test]
    fn unknown_tags_are_errors() {
        assert_eq!(
            parse_scheme_id("F9"),
            Err(LookupError::UnknownCartridgeVariant("F9".to_owned())),
        );
        assert!(parse_scheme_id("").is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for id in SchemeId::iter() {
            assert_eq!(parse_scheme_id(&id.to_string()), Ok(id));
        }
    }

    #[test]
    fn unsupported_schemes_are_not_unknown() {
        assert_eq!(
            lookup_scheme(SchemeId::DPC).err(),
            Some(LookupError::UnsupportedCartridgeVariant(SchemeId::DPC)),
        );
    }

    #[test]
    fn every_supported_scheme_has_a_valid_layout() {
        for id in SchemeId::iter() {
            if let LookupResult::Supported(scheme) = try_lookup_scheme(id) {
                let layout = scheme.layout();
                assert!(!layout.windows().is_empty(), "{id} has no windows.");
                assert!(layout.rom_bank_size() <= layout.rom_max_size(), "{id} has an oversized bank.");
            }
        }
    }
}
