//! Display text for great persons

use super::definition::{GreatPersonDefinition, GreatPersonEffect};
use crate::i18n::Translator;

/// Translated display name
pub fn name(def: &GreatPersonDefinition, translator: &dyn Translator) -> String {
    translator.translate(def.id.as_str(), &[])
}

/// Translated effect description at `level`. Pure, never mutates state.
pub fn desc(def: &GreatPersonDefinition, level: u32, translator: &dyn Translator) -> String {
    let value = def.value_at(level).to_string();
    match &def.effect {
        GreatPersonEffect::Direct { .. } => {
            translator.translate(&format!("{}Desc", def.id), &[("value", value)])
        }
        GreatPersonEffect::Boost {
            multipliers,
            buildings,
        } => {
            let multipliers: Vec<&str> = multipliers.iter().map(|m| m.desc()).collect();
            let buildings: Vec<String> = buildings
                .iter()
                .map(|b| translator.translate(b, &[]))
                .collect();
            translator.translate(
                "BoostDescription",
                &[
                    ("value", value),
                    ("multipliers", multipliers.join(", ")),
                    ("buildings", buildings.join(", ")),
                ],
            )
        }
    }
}

/// Label attached to every multiplier this great person contributes
pub fn source_label(def: &GreatPersonDefinition, permanent: bool, translator: &dyn Translator) -> String {
    let key = if permanent {
        "SourceGreatPersonPermanent"
    } else {
        "SourceGreatPerson"
    };
    translator.translate(key, &[("person", name(def, translator))])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::great_person::GreatPersonCatalog;
    use crate::i18n::KeyTranslator;

    #[test]
    fn test_direct_desc() {
        let catalog = GreatPersonCatalog::builtin();
        let def = catalog.get("TangOfShang").unwrap();
        assert_eq!(desc(def, 3, &KeyTranslator), "TangOfShangDesc(value=1.5)");
    }

    #[test]
    fn test_boost_desc() {
        let catalog = GreatPersonCatalog::builtin();
        let def = catalog.get("Agamemnon").unwrap();
        assert_eq!(
            desc(def, 2, &KeyTranslator),
            "BoostDescription(value=2, multipliers=Production Multiplier, Storage Multiplier, buildings=StoneQuarry, Marbleworks)"
        );
    }

    #[test]
    fn test_source_label() {
        let catalog = GreatPersonCatalog::builtin();
        let def = catalog.get("Dido").unwrap();
        assert_eq!(
            source_label(def, true, &KeyTranslator),
            "SourceGreatPersonPermanent(person=Dido)"
        );
        assert_eq!(source_label(def, false, &KeyTranslator), "SourceGreatPerson(person=Dido)");
    }
}
