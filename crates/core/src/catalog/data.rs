//! Static catalog tables: 12 products across three categories, the EDW
//! flashing table, blinds/screens, and add-on accessories.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::SizeTables;
use crate::domain::extras::{
    Accessory, AccessoryId, AccessoryKind, Blind, BlindId, BlindKind, Flashing,
};
use crate::domain::product::{
    ModelCode, OpeningType, Product, ProductCategory, ProductId, RoofType, TunnelKind,
};
use crate::domain::size::{Size, SizeCode};

fn sizes(entries: &[(&str, u32, u32)]) -> Vec<Size> {
    entries
        .iter()
        .map(|(code, width, height)| Size {
            code: SizeCode::new(*code),
            width_mm: *width,
            height_mm: *height,
            label: format!("{width} x {height}"),
        })
        .collect()
}

fn codes(entries: &[&str]) -> Vec<SizeCode> {
    entries.iter().map(|code| SizeCode::new(*code)).collect()
}

fn price_table(entries: &[(&str, u32)]) -> BTreeMap<SizeCode, Decimal> {
    entries.iter().map(|(code, amount)| (SizeCode::new(*code), Decimal::from(*amount))).collect()
}

pub fn size_tables() -> SizeTables {
    SizeTables {
        pitched: sizes(&[
            ("C01", 550, 700),
            ("C04", 550, 980),
            ("C06", 550, 1180),
            ("C08", 550, 1400),
            ("C12", 550, 1800),
            ("M02", 780, 780),
            ("M04", 780, 980),
            ("M06", 780, 1180),
            ("M08", 780, 1400),
            ("S01", 1140, 700),
            ("S06", 1140, 1180),
        ]),
        flat: sizes(&[
            ("1430", 460, 870),
            ("2222", 665, 665),
            ("2230", 665, 870),
            ("2234", 665, 970),
            ("2246", 665, 1275),
            ("2270", 665, 1885),
            ("3030", 870, 870),
            ("3046", 870, 1275),
            ("3055", 870, 1505),
            ("3072", 870, 1935),
            ("3434", 970, 970),
            ("3446", 970, 1275),
            ("4622", 1275, 665),
            ("4646", 1275, 1275),
            ("4672", 1275, 1935),
        ]),
        roof_window: sizes(&[
            ("CK02", 550, 780),
            ("CK04", 550, 980),
            ("MK04", 780, 980),
            ("MK06", 780, 1180),
            ("MK08", 780, 1400),
            ("SK06", 1140, 1180),
        ]),
        tunnel: sizes(&[("0K14", 350, 350), ("014", 350, 350)]),
    }
}

pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new("fs"),
            model: ModelCode::new("FS"),
            name: "Fixed Skylight (FS)".to_owned(),
            category: ProductCategory::Skylight,
            tunnel_kind: None,
            roof_types: vec![RoofType::Pitched],
            opening: OpeningType::Fixed,
            compatible_sizes: codes(&[
                "C01", "C04", "C06", "C08", "C12", "M02", "M04", "M06", "M08", "S01", "S06",
            ]),
            prices: price_table(&[
                ("C01", 532),
                ("C04", 614),
                ("C06", 705),
                ("C08", 788),
                ("C12", 1114),
                ("M02", 725),
                ("M04", 765),
                ("M06", 866),
                ("M08", 969),
                ("S01", 843),
                ("S06", 1006),
            ]),
        },
        Product {
            id: ProductId::new("vs"),
            model: ModelCode::new("VS"),
            name: "Manual Opening Skylight (VS)".to_owned(),
            category: ProductCategory::Skylight,
            tunnel_kind: None,
            roof_types: vec![RoofType::Pitched],
            opening: OpeningType::Manual,
            compatible_sizes: codes(&[
                "C01", "C04", "C06", "C08", "M02", "M04", "M06", "M08", "S01", "S06",
            ]),
            prices: price_table(&[
                ("C01", 1228),
                ("C04", 1248),
                ("C06", 1334),
                ("C08", 1402),
                ("M02", 1402),
                ("M04", 1463),
                ("M06", 1597),
                ("M08", 1731),
                ("S01", 1540),
                ("S06", 1941),
            ]),
        },
        Product {
            id: ProductId::new("vse"),
            model: ModelCode::new("VSE"),
            name: "Electric Opening Skylight (VSE)".to_owned(),
            category: ProductCategory::Skylight,
            tunnel_kind: None,
            roof_types: vec![RoofType::Pitched],
            opening: OpeningType::Electric,
            compatible_sizes: codes(&[
                "C01", "C04", "C06", "C08", "M04", "M06", "M08", "S01", "S06",
            ]),
            prices: price_table(&[
                ("C01", 2311),
                ("C04", 2339),
                ("C06", 2402),
                ("C08", 2461),
                ("M04", 2509),
                ("M06", 2618),
                ("M08", 2727),
                ("S01", 2595),
                ("S06", 2894),
            ]),
        },
        Product {
            id: ProductId::new("vss"),
            model: ModelCode::new("VSS"),
            name: "Solar Opening Skylight (VSS)".to_owned(),
            category: ProductCategory::Skylight,
            tunnel_kind: None,
            roof_types: vec![RoofType::Pitched],
            opening: OpeningType::Solar,
            compatible_sizes: codes(&[
                "C01", "C04", "C06", "C08", "M02", "M04", "M06", "M08", "S01", "S06",
            ]),
            prices: price_table(&[
                ("C01", 2492),
                ("C04", 2522),
                ("C06", 2590),
                ("C08", 2653),
                ("M02", 2643),
                ("M04", 2705),
                ("M06", 2822),
                ("M08", 2941),
                ("S01", 2798),
                ("S06", 3120),
            ]),
        },
        Product {
            id: ProductId::new("ggl"),
            model: ModelCode::new("GGL"),
            name: "Centre Pivot Roof Window (GGL)".to_owned(),
            category: ProductCategory::RoofWindow,
            tunnel_kind: None,
            roof_types: vec![RoofType::Pitched],
            opening: OpeningType::Manual,
            compatible_sizes: codes(&["CK02", "CK04", "MK04", "MK08", "SK06"]),
            prices: price_table(&[
                ("CK02", 814),
                ("CK04", 863),
                ("MK04", 1010),
                ("MK08", 1234),
                ("SK06", 1528),
            ]),
        },
        Product {
            id: ProductId::new("gpl"),
            model: ModelCode::new("GPL"),
            name: "Dual Action Roof Window (GPL)".to_owned(),
            category: ProductCategory::RoofWindow,
            tunnel_kind: None,
            roof_types: vec![RoofType::Pitched],
            opening: OpeningType::Manual,
            compatible_sizes: codes(&["CK04", "MK04", "MK06", "MK08", "SK06"]),
            prices: price_table(&[
                ("CK04", 969),
                ("MK04", 1114),
                ("MK06", 1221),
                ("MK08", 1381),
                ("SK06", 1608),
            ]),
        },
        Product {
            id: ProductId::new("fcm"),
            model: ModelCode::new("FCM"),
            name: "Flat Roof Fixed (FCM)".to_owned(),
            category: ProductCategory::Skylight,
            tunnel_kind: None,
            roof_types: vec![RoofType::Flat],
            opening: OpeningType::Fixed,
            // 4622 is not in the FCM price list and is deliberately absent.
            compatible_sizes: codes(&[
                "1430", "2222", "2230", "2234", "2246", "2270", "3030", "3046", "3055", "3072",
                "3434", "3446", "4646", "4672",
            ]),
            prices: price_table(&[
                ("1430", 351),
                ("2222", 381),
                ("2230", 414),
                ("2234", 438),
                ("2246", 497),
                ("2270", 896),
                ("3030", 481),
                ("3046", 611),
                ("3055", 745),
                ("3072", 1889),
                ("3434", 547),
                ("3446", 645),
                ("4646", 677),
                ("4672", 2102),
            ]),
        },
        Product {
            id: ProductId::new("vcm"),
            model: ModelCode::new("VCM"),
            name: "Flat Roof Manual (VCM)".to_owned(),
            category: ProductCategory::Skylight,
            tunnel_kind: None,
            roof_types: vec![RoofType::Flat],
            opening: OpeningType::Manual,
            compatible_sizes: codes(&["2222", "2234", "2246", "3030", "3046", "3434", "4646"]),
            prices: price_table(&[
                ("2222", 1296),
                ("2234", 1400),
                ("2246", 1547),
                ("3030", 1621),
                ("3046", 1760),
                ("3434", 1694),
                ("4646", 2064),
            ]),
        },
        Product {
            id: ProductId::new("vcs"),
            model: ModelCode::new("VCS"),
            name: "Flat Roof Solar (VCS)".to_owned(),
            category: ProductCategory::Skylight,
            tunnel_kind: None,
            roof_types: vec![RoofType::Flat],
            opening: OpeningType::Solar,
            compatible_sizes: codes(&[
                "2222", "2234", "2246", "3030", "3046", "3434", "4622", "4646",
            ]),
            prices: price_table(&[
                ("2222", 2510),
                ("2234", 2654),
                ("2246", 2828),
                ("3030", 2837),
                ("3046", 2976),
                ("3434", 2899),
                ("4622", 2846),
                ("4646", 3119),
            ]),
        },
        Product {
            id: ProductId::new("twr"),
            model: ModelCode::new("TWR"),
            name: "Rigid Sun Tunnel (TWR)".to_owned(),
            category: ProductCategory::SunTunnel,
            tunnel_kind: Some(TunnelKind::Rigid),
            roof_types: vec![RoofType::Pitched],
            opening: OpeningType::Fixed,
            compatible_sizes: codes(&["0K14"]),
            prices: price_table(&[("0K14", 747)]),
        },
        Product {
            id: ProductId::new("twf"),
            model: ModelCode::new("TWF"),
            name: "Flexible Sun Tunnel (TWF)".to_owned(),
            category: ProductCategory::SunTunnel,
            tunnel_kind: Some(TunnelKind::Flexible),
            roof_types: vec![RoofType::Pitched],
            opening: OpeningType::Fixed,
            compatible_sizes: codes(&["0K14"]),
            prices: price_table(&[("0K14", 461)]),
        },
        Product {
            id: ProductId::new("tcr"),
            model: ModelCode::new("TCR"),
            name: "Sun Tunnel (TCR)".to_owned(),
            category: ProductCategory::SunTunnel,
            tunnel_kind: Some(TunnelKind::FlatUniversal),
            roof_types: vec![RoofType::Flat, RoofType::Pitched],
            opening: OpeningType::Fixed,
            compatible_sizes: codes(&["014"]),
            prices: price_table(&[("014", 795)]),
        },
    ]
}

pub fn flashing() -> Flashing {
    Flashing {
        id: "edw".to_owned(),
        model: ModelCode::new("EDW"),
        name: "EDW Flashing (Tile/Corrugated)".to_owned(),
        prices: price_table(&[
            ("C01", 109),
            ("C04", 114),
            ("C06", 115),
            ("C08", 122),
            ("C12", 152),
            ("M02", 131),
            ("M04", 131),
            ("M06", 135),
            ("M08", 138),
            ("S01", 139),
            ("S06", 162),
            ("CK02", 109),
            ("CK04", 126),
            ("MK04", 145),
            ("MK06", 149),
            ("MK08", 152),
            ("SK06", 170),
        ]),
    }
}

fn models(entries: &[&str]) -> Vec<ModelCode> {
    entries.iter().map(|model| ModelCode::new(*model)).collect()
}

pub fn blinds() -> Vec<Blind> {
    vec![
        Blind {
            id: BlindId::new("fscd"),
            model: ModelCode::new("FSCD"),
            name: "Solar Honeycomb".to_owned(),
            subtitle: Some("(Darkening)".to_owned()),
            kind: BlindKind::Darkening,
            compatible_models: models(&["FS"]),
            prices: price_table(&[
                ("C01", 614),
                ("C04", 614),
                ("C06", 614),
                ("C08", 614),
                ("C12", 768),
                ("M02", 628),
                ("M04", 628),
                ("M06", 628),
                ("M08", 628),
                ("S01", 641),
                ("S06", 641),
            ]),
        },
        Blind {
            id: BlindId::new("fsld"),
            model: ModelCode::new("FSLD"),
            name: "Solar Translucent".to_owned(),
            subtitle: Some("(Light Filtering)".to_owned()),
            kind: BlindKind::Translucent,
            compatible_models: models(&["FS"]),
            // C12 carries a zero price: the blind is not orderable in that size.
            prices: price_table(&[
                ("C01", 614),
                ("C04", 614),
                ("C06", 614),
                ("C08", 614),
                ("C12", 0),
                ("M02", 628),
                ("M04", 628),
                ("M06", 628),
                ("M08", 628),
                ("S01", 641),
                ("S06", 641),
            ]),
        },
        Blind {
            id: BlindId::new("fsch"),
            model: ModelCode::new("FSCH"),
            name: "Solar Honeycomb".to_owned(),
            subtitle: Some("(Darkening)".to_owned()),
            kind: BlindKind::Darkening,
            compatible_models: models(&["VS", "VSE", "VSS"]),
            prices: price_table(&[
                ("C01", 614),
                ("C04", 614),
                ("C06", 614),
                ("C08", 614),
                ("M02", 628),
                ("M04", 628),
                ("M06", 628),
                ("M08", 628),
                ("S01", 641),
                ("S06", 641),
            ]),
        },
        Blind {
            id: BlindId::new("fslh"),
            model: ModelCode::new("FSLH"),
            name: "Solar Translucent".to_owned(),
            subtitle: Some("(Light Filtering)".to_owned()),
            kind: BlindKind::Translucent,
            compatible_models: models(&["VS", "VSE", "VSS"]),
            prices: price_table(&[
                ("C01", 614),
                ("C04", 614),
                ("C06", 614),
                ("C08", 614),
                ("M02", 628),
                ("M04", 628),
                ("M06", 628),
                ("M08", 628),
                ("S01", 641),
                ("S06", 641),
            ]),
        },
        Blind {
            id: BlindId::new("fhc"),
            model: ModelCode::new("FHC"),
            name: "Manual Honeycomb Blackout".to_owned(),
            subtitle: Some("(Room Darkening)".to_owned()),
            kind: BlindKind::Darkening,
            compatible_models: models(&["GGL", "GPL"]),
            prices: price_table(&[
                ("CK02", 247),
                ("CK04", 265),
                ("MK04", 273),
                ("MK06", 292),
                ("MK08", 318),
                ("SK06", 342),
            ]),
        },
        Blind {
            id: BlindId::new("zil"),
            model: ModelCode::new("ZIL"),
            name: "Insect Screen".to_owned(),
            subtitle: None,
            kind: BlindKind::Accessory,
            compatible_models: models(&["GGL", "GPL"]),
            prices: price_table(&[
                ("CK02", 339),
                ("CK04", 339),
                ("MK04", 419),
                ("MK06", 419),
                ("MK08", 419),
                ("SK06", 465),
            ]),
        },
        Blind {
            id: BlindId::new("fscc"),
            model: ModelCode::new("FSCC"),
            name: "Solar Honeycomb".to_owned(),
            subtitle: Some("(Darkening)".to_owned()),
            kind: BlindKind::Darkening,
            compatible_models: models(&["FCM", "VCM", "VCS"]),
            prices: price_table(&[
                ("1430", 615),
                ("2222", 615),
                ("2230", 615),
                ("2234", 615),
                ("2246", 615),
                ("2270", 706),
                ("3030", 620),
                ("3046", 627),
                ("3055", 640),
                ("3072", 706),
                ("3434", 660),
                ("3446", 660),
                ("4646", 680),
                ("4672", 706),
            ]),
        },
    ]
}

pub fn accessories() -> Vec<Accessory> {
    vec![
        Accessory {
            id: AccessoryId::new("zzz199"),
            name: "ZZZ 199 Blind Tray".to_owned(),
            kind: AccessoryKind::BlindTray,
            compatible_models: models(&["FCM", "VCM", "VCS"]),
            // Sparse: 1430, 3055, 3072 and 4672 curbs take no blind tray.
            prices: price_table(&[
                ("2222", 95),
                ("2230", 95),
                ("2234", 95),
                ("2246", 95),
                ("2270", 122),
                ("3030", 98),
                ("3046", 98),
                ("3434", 101),
                ("3446", 101),
                ("4622", 105),
                ("4646", 105),
            ]),
        },
        Accessory {
            id: AccessoryId::new("ztr0k14"),
            name: "ZTR 0K14 Rigid 1240mm Extension".to_owned(),
            kind: AccessoryKind::TunnelExtension,
            compatible_models: models(&["TWR", "TCR"]),
            prices: price_table(&[("0K14", 297), ("014", 297)]),
        },
    ]
}
