//! Built-in great person table

use super::definition::{double, half, linear, raw_level, triple, GreatPersonDefinition};
use crate::config::GlobalMultiplier::{
    BuilderCapacity, Happiness, SciencePerBusyWorker, SciencePerIdleWorker, TransportCapacity,
};
use crate::config::MultiplierType::{Output, Storage};
use crate::config::TechAge::*;

/// Every great person shipped with the game, oldest age first
pub fn builtin_definitions() -> Vec<GreatPersonDefinition> {
    use GreatPersonDefinition as D;

    vec![
        // Bronze Age
        D::boost("Hammurabi", BronzeAge, "c. 1800s BC", linear, &[Output], &["House", "Hut"]),
        D::direct_with("RamessesII", BronzeAge, "c. 1300s BC", linear, BuilderCapacity, raw_level),
        D::direct("TangOfShang", BronzeAge, "c. 1600s BC", half, SciencePerIdleWorker),
        // Iron Age
        D::boost("Agamemnon", IronAge, "c. 1200s BC", linear, &[Output, Storage], &["StoneQuarry", "Marbleworks"]),
        D::boost("DukeOfZhou", IronAge, "c. 1000s BC", linear, &[Output, Storage], &["CopperMiningCamp", "Blacksmith"]),
        D::boost("Dido", IronAge, "c. 800s BC", linear, &[Output, Storage], &["LivestockFarm", "Stable"]),
        // Classical Age
        D::boost("NebuchadnezzarII", ClassicalAge, "c. 600s BC", linear, &[Output, Storage], &["WheatFarm", "Brewery"]),
        D::boost("Herodotus", ClassicalAge, "c. 600s BC", linear, &[Output, Storage], &["WritersGuild", "MusiciansGuild"]),
        D::boost("CyrusII", ClassicalAge, "c. 600s BC", linear, &[Output, Storage], &["IronMiningCamp", "IronForge"]),
        D::direct("Socrates", ClassicalAge, "c. 600s BC", linear, SciencePerBusyWorker),
        D::boost("QinShiHuang", ClassicalAge, "c. 200s BC", linear, &[Output, Storage], &["ChariotWorkshop", "Armory"]),
        // Middle Age
        D::boost("Justinian", MiddleAge, "482 ~ 565 AD", linear, &[Output, Storage], &["FurnitureWorkshop", "GarmentWorkshop"]),
        D::boost("Charlemagne", MiddleAge, "747 ~ 814 AD", linear, &[Output, Storage], &["SwordForge", "KnightCamp"]),
        D::boost("HarunAlRashid", MiddleAge, "763 ~ 809 AD", linear, &[Output, Storage], &["CheeseMaker", "Mosque"]),
        D::direct_with("WuZetian", MiddleAge, "624 ~ 705 AD", linear, TransportCapacity, raw_level),
        D::direct("Rurik", MiddleAge, "624 ~ 705 AD", double, Happiness),
        // Renaissance Age
        D::boost("LeonardoDaVinci", RenaissanceAge, "1452 ~ 1519 AD", linear, &[Output, Storage], &["PaintersGuild", "University"]),
        D::boost("MartinLuther", RenaissanceAge, "1483 ~ 1546 AD", linear, &[Output, Storage], &["Church", "Cathedral"]),
        D::boost("WilliamShakespeare", RenaissanceAge, "1564 ~ 1616 AD", linear, &[Output, Storage], &["PaperMaker", "PrintingHouse"]),
        D::boost("ReneDescartes", RenaissanceAge, "1596 ~ 1650 AD", double, &[Output], &["School", "Library"]),
        D::boost("ZhengHe", RenaissanceAge, "1371 ~ 1435 AD", linear, &[Storage, Output], &["CaravelBuilder", "GalleonBuilder"]),
        D::boost("CosimoDeMedici", RenaissanceAge, "1389 ~ 1464 AD", linear, &[Storage, Output], &["GoldMiningCamp", "CoinMint"]),
        // Industrial Age
        D::boost("JamesWatt", IndustrialAge, "1736 ~ 1819 AD", linear, &[Storage, Output], &["Steamworks", "DynamiteWorkshop"]),
        D::boost("KarlMarx", IndustrialAge, "1818 ~ 1883 AD", linear, &[Storage, Output], &["Courthouse", "Parliament"]),
        D::boost("AdaLovelace", IndustrialAge, "1815 ~ 1852 AD", linear, &[Storage, Output], &["PrintingHouse", "Museum"]),
        D::boost("NapoleonBonaparte", IndustrialAge, "1769 ~ 1821 AD", linear, &[Storage, Output], &["CannonWorkshop", "GunpowderMill"]),
        D::direct("CharlesDarwin", IndustrialAge, "1809 ~ 1882 AD", double, SciencePerBusyWorker),
        D::direct("FlorenceNightingale", IndustrialAge, "1820 ~ 1910 AD", triple, Happiness),
    ]
}
