//! The monster table. Base monsters are listed alphabetically, each followed
//! by its shifted variant.

use super::{Element, Monster, MonsterType};

pub static MONSTERS: [Monster; 56] = [
    Monster {
        id: "banshee",
        name: "Banshee",
        elements: &[Element::Wind],
        types: [MonsterType::Terror, MonsterType::Weakness, MonsterType::Affliction],
        image: Some("/images/monsters/banshee.png"),
    },
    Monster {
        id: "banshee-shifted",
        name: "Shifted Banshee",
        elements: &[Element::Wind],
        types: [MonsterType::Terror, MonsterType::Purge, MonsterType::Age],
        image: Some("/images/monsters/banshee-shifted.png"),
    },
    Monster {
        id: "basilisk",
        name: "Basilisk",
        elements: &[Element::Earth],
        types: [MonsterType::Poison, MonsterType::Terror, MonsterType::Shield],
        image: Some("/images/monsters/basilisk.png"),
    },
    Monster {
        id: "basilisk-shifted",
        name: "Shifted Basilisk",
        elements: &[Element::Earth],
        types: [MonsterType::Poison, MonsterType::Age, MonsterType::Tank],
        image: Some("/images/monsters/basilisk-shifted.png"),
    },
    Monster {
        id: "cherufe",
        name: "Cherufe",
        elements: &[Element::Earth, Element::Fire],
        types: [MonsterType::Critical, MonsterType::Burn, MonsterType::Power],
        image: Some("/images/monsters/cherufe.png"),
    },
    Monster {
        id: "cherufe-shifted",
        name: "Shifted Cherufe",
        elements: &[Element::Earth, Element::Fire],
        types: [MonsterType::Critical, MonsterType::Force, MonsterType::Tank],
        image: Some("/images/monsters/cherufe-shifted.png"),
    },
    Monster {
        id: "chimera",
        name: "Chimera",
        elements: &[Element::Fire, Element::Wind, Element::Earth],
        types: [MonsterType::Power, MonsterType::Burn, MonsterType::Summon],
        image: Some("/images/monsters/chimera.png"),
    },
    Monster {
        id: "chimera-shifted",
        name: "Shifted Chimera",
        elements: &[Element::Fire, Element::Wind, Element::Earth],
        types: [MonsterType::Power, MonsterType::Critical, MonsterType::Sidekick],
        image: Some("/images/monsters/chimera-shifted.png"),
    },
    Monster {
        id: "cockatrice",
        name: "Cockatrice",
        elements: &[Element::Wind, Element::Earth],
        types: [MonsterType::Age, MonsterType::Dodge, MonsterType::Poison],
        image: Some("/images/monsters/cockatrice.png"),
    },
    Monster {
        id: "cockatrice-shifted",
        name: "Shifted Cockatrice",
        elements: &[Element::Wind, Element::Earth],
        types: [MonsterType::Age, MonsterType::Weakness, MonsterType::Critical],
        image: Some("/images/monsters/cockatrice-shifted.png"),
    },
    Monster {
        id: "djinn",
        name: "Djinn",
        elements: &[Element::Fire, Element::Wind],
        types: [MonsterType::Aether, MonsterType::Summon, MonsterType::Power],
        image: Some("/images/monsters/djinn.png"),
    },
    Monster {
        id: "djinn-shifted",
        name: "Shifted Djinn",
        elements: &[Element::Fire, Element::Wind],
        types: [MonsterType::Aether, MonsterType::Purge, MonsterType::Dodge],
        image: Some("/images/monsters/djinn-shifted.png"),
    },
    Monster {
        id: "domovoy",
        name: "Domovoy",
        elements: &[Element::Earth],
        types: [MonsterType::Shield, MonsterType::Sidekick, MonsterType::Heal],
        image: Some("/images/monsters/domovoy.png"),
    },
    Monster {
        id: "domovoy-shifted",
        name: "Shifted Domovoy",
        elements: &[Element::Earth, Element::Fire],
        types: [MonsterType::Shield, MonsterType::Regeneration, MonsterType::Purge],
        image: Some("/images/monsters/domovoy-shifted.png"),
    },
    Monster {
        id: "golem",
        name: "Golem",
        elements: &[Element::Earth],
        types: [MonsterType::Tank, MonsterType::Shield, MonsterType::Force],
        image: Some("/images/monsters/golem.png"),
    },
    Monster {
        id: "golem-shifted",
        name: "Shifted Golem",
        elements: &[Element::Earth],
        types: [MonsterType::Tank, MonsterType::Power, MonsterType::Age],
        image: Some("/images/monsters/golem-shifted.png"),
    },
    Monster {
        id: "grimoire",
        name: "Grimoire",
        elements: &[Element::Wild],
        types: [MonsterType::Aether, MonsterType::Summon, MonsterType::Purge],
        image: Some("/images/monsters/grimoire.png"),
    },
    Monster {
        id: "grimoire-shifted",
        name: "Shifted Grimoire",
        elements: &[Element::Wild],
        types: [MonsterType::Aether, MonsterType::Affliction, MonsterType::Power],
        image: Some("/images/monsters/grimoire-shifted.png"),
    },
    Monster {
        id: "hydra",
        name: "Hydra",
        elements: &[Element::Water, Element::Fire],
        types: [MonsterType::Regeneration, MonsterType::Poison, MonsterType::Force],
        image: Some("/images/monsters/hydra.png"),
    },
    Monster {
        id: "hydra-shifted",
        name: "Shifted Hydra",
        elements: &[Element::Water, Element::Fire],
        types: [MonsterType::Regeneration, MonsterType::Burn, MonsterType::Terror],
        image: Some("/images/monsters/hydra-shifted.png"),
    },
    Monster {
        id: "jotunn",
        name: "Jotunn",
        elements: &[Element::Water, Element::Wind],
        types: [MonsterType::Tank, MonsterType::Force, MonsterType::Shield],
        image: Some("/images/monsters/jotunn.png"),
    },
    Monster {
        id: "jotunn-shifted",
        name: "Shifted Jotunn",
        elements: &[Element::Water, Element::Wind],
        types: [MonsterType::Tank, MonsterType::Weakness, MonsterType::Regeneration],
        image: Some("/images/monsters/jotunn-shifted.png"),
    },
    Monster {
        id: "kappa",
        name: "Kappa",
        elements: &[Element::Water],
        types: [MonsterType::Dodge, MonsterType::Force, MonsterType::Sidekick],
        image: Some("/images/monsters/kappa.png"),
    },
    Monster {
        id: "kappa-shifted",
        name: "Shifted Kappa",
        elements: &[Element::Water, Element::Earth],
        types: [MonsterType::Dodge, MonsterType::Heal, MonsterType::Critical],
        image: Some("/images/monsters/kappa-shifted.png"),
    },
    Monster {
        id: "kitsune",
        name: "Kitsune",
        elements: &[Element::Fire],
        types: [MonsterType::Dodge, MonsterType::Aether, MonsterType::Affliction],
        image: Some("/images/monsters/kitsune.png"),
    },
    Monster {
        id: "kitsune-shifted",
        name: "Shifted Kitsune",
        elements: &[Element::Fire, Element::Wind],
        types: [MonsterType::Dodge, MonsterType::Burn, MonsterType::Terror],
        image: Some("/images/monsters/kitsune-shifted.png"),
    },
    Monster {
        id: "leshy",
        name: "Leshy",
        elements: &[Element::Earth, Element::Wind],
        types: [MonsterType::Regeneration, MonsterType::Summon, MonsterType::Affliction],
        image: Some("/images/monsters/leshy.png"),
    },
    Monster {
        id: "leshy-shifted",
        name: "Shifted Leshy",
        elements: &[Element::Earth, Element::Wind],
        types: [MonsterType::Regeneration, MonsterType::Poison, MonsterType::Shield],
        image: Some("/images/monsters/leshy-shifted.png"),
    },
    Monster {
        id: "mandrake",
        name: "Mandrake",
        elements: &[Element::Earth],
        types: [MonsterType::Affliction, MonsterType::Heal, MonsterType::Terror],
        image: Some("/images/monsters/mandrake.png"),
    },
    Monster {
        id: "mandrake-shifted",
        name: "Shifted Mandrake",
        elements: &[Element::Earth, Element::Water],
        types: [MonsterType::Affliction, MonsterType::Poison, MonsterType::Summon],
        image: Some("/images/monsters/mandrake-shifted.png"),
    },
    Monster {
        id: "manticore",
        name: "Manticore",
        elements: &[Element::Fire, Element::Earth],
        types: [MonsterType::Poison, MonsterType::Critical, MonsterType::Force],
        image: Some("/images/monsters/manticore.png"),
    },
    Monster {
        id: "manticore-shifted",
        name: "Shifted Manticore",
        elements: &[Element::Fire, Element::Earth],
        types: [MonsterType::Poison, MonsterType::Power, MonsterType::Dodge],
        image: Some("/images/monsters/manticore-shifted.png"),
    },
    Monster {
        id: "minokawa",
        name: "Minokawa",
        elements: &[Element::Fire, Element::Wind],
        types: [MonsterType::Sidekick, MonsterType::Burn, MonsterType::Dodge],
        image: Some("/images/monsters/minokawa.png"),
    },
    Monster {
        id: "minokawa-shifted",
        name: "Shifted Minokawa",
        elements: &[Element::Fire, Element::Wind],
        types: [MonsterType::Sidekick, MonsterType::Aether, MonsterType::Critical],
        image: Some("/images/monsters/minokawa-shifted.png"),
    },
    Monster {
        id: "nixe",
        name: "Nixe",
        elements: &[Element::Earth, Element::Water],
        types: [MonsterType::Heal, MonsterType::Purge, MonsterType::Shield],
        image: Some("/images/monsters/nixe.png"),
    },
    Monster {
        id: "nixe-shifted",
        name: "Shifted Nixe",
        elements: &[Element::Earth, Element::Water],
        types: [MonsterType::Heal, MonsterType::Regeneration, MonsterType::Weakness],
        image: Some("/images/monsters/nixe-shifted.png"),
    },
    Monster {
        id: "nosferatu",
        name: "Nosferatu",
        elements: &[Element::Water, Element::Fire],
        types: [MonsterType::Age, MonsterType::Regeneration, MonsterType::Terror],
        image: Some("/images/monsters/nosferatu.png"),
    },
    Monster {
        id: "nosferatu-shifted",
        name: "Shifted Nosferatu",
        elements: &[Element::Water, Element::Fire],
        types: [MonsterType::Age, MonsterType::Affliction, MonsterType::Power],
        image: Some("/images/monsters/nosferatu-shifted.png"),
    },
    Monster {
        id: "ooze",
        name: "Ooze",
        elements: &[Element::Water, Element::Earth],
        types: [MonsterType::Poison, MonsterType::Regeneration, MonsterType::Tank],
        image: Some("/images/monsters/ooze.png"),
    },
    Monster {
        id: "ooze-shifted",
        name: "Shifted Ooze",
        elements: &[Element::Water, Element::Earth],
        types: [MonsterType::Poison, MonsterType::Purge, MonsterType::Summon],
        image: Some("/images/monsters/ooze-shifted.png"),
    },
    Monster {
        id: "rusalka",
        name: "Rusalka",
        elements: &[Element::Water],
        types: [MonsterType::Weakness, MonsterType::Heal, MonsterType::Terror],
        image: Some("/images/monsters/rusalka.png"),
    },
    Monster {
        id: "rusalka-shifted",
        name: "Shifted Rusalka",
        elements: &[Element::Water, Element::Wind],
        types: [MonsterType::Weakness, MonsterType::Aether, MonsterType::Sidekick],
        image: Some("/images/monsters/rusalka-shifted.png"),
    },
    Monster {
        id: "selkie",
        name: "Selkie",
        elements: &[Element::Water, Element::Wind],
        types: [MonsterType::Shield, MonsterType::Heal, MonsterType::Dodge],
        image: Some("/images/monsters/selkie.png"),
    },
    Monster {
        id: "selkie-shifted",
        name: "Shifted Selkie",
        elements: &[Element::Water, Element::Wind],
        types: [MonsterType::Shield, MonsterType::Sidekick, MonsterType::Purge],
        image: Some("/images/monsters/selkie-shifted.png"),
    },
    Monster {
        id: "tatzelwurm",
        name: "Tatzelwurm",
        elements: &[Element::Fire, Element::Earth],
        types: [MonsterType::Burn, MonsterType::Tank, MonsterType::Critical],
        image: Some("/images/monsters/tatzelwurm.png"),
    },
    Monster {
        id: "tatzelwurm-shifted",
        name: "Shifted Tatzelwurm",
        elements: &[Element::Fire, Element::Earth],
        types: [MonsterType::Burn, MonsterType::Force, MonsterType::Shield],
        image: Some("/images/monsters/tatzelwurm-shifted.png"),
    },
    Monster {
        id: "tengu",
        name: "Tengu",
        elements: &[Element::Wind],
        types: [MonsterType::Critical, MonsterType::Dodge, MonsterType::Force],
        image: Some("/images/monsters/tengu.png"),
    },
    Monster {
        id: "tengu-shifted",
        name: "Shifted Tengu",
        elements: &[Element::Wind, Element::Fire],
        types: [MonsterType::Critical, MonsterType::Sidekick, MonsterType::Weakness],
        image: Some("/images/monsters/tengu-shifted.png"),
    },
    Monster {
        id: "ukko",
        name: "Ukko",
        elements: &[Element::Wind, Element::Water, Element::Fire],
        types: [MonsterType::Power, MonsterType::Force, MonsterType::Purge],
        image: Some("/images/monsters/ukko.png"),
    },
    Monster {
        id: "ukko-shifted",
        name: "Shifted Ukko",
        elements: &[Element::Wind, Element::Water, Element::Fire],
        types: [MonsterType::Power, MonsterType::Aether, MonsterType::Heal],
        image: Some("/images/monsters/ukko-shifted.png"),
    },
    Monster {
        id: "wendigo",
        name: "Wendigo",
        elements: &[Element::Wind, Element::Water],
        types: [MonsterType::Terror, MonsterType::Weakness, MonsterType::Age],
        image: Some("/images/monsters/wendigo.png"),
    },
    Monster {
        id: "wendigo-shifted",
        name: "Shifted Wendigo",
        elements: &[Element::Wind, Element::Water],
        types: [MonsterType::Terror, MonsterType::Tank, MonsterType::Regeneration],
        image: Some("/images/monsters/wendigo-shifted.png"),
    },
    Monster {
        id: "wolpertinger",
        name: "Wolpertinger",
        elements: &[Element::Wind, Element::Earth],
        types: [MonsterType::Sidekick, MonsterType::Summon, MonsterType::Dodge],
        image: Some("/images/monsters/wolpertinger.png"),
    },
    Monster {
        id: "wolpertinger-shifted",
        name: "Shifted Wolpertinger",
        elements: &[Element::Wind, Element::Earth],
        types: [MonsterType::Sidekick, MonsterType::Age, MonsterType::Heal],
        image: Some("/images/monsters/wolpertinger-shifted.png"),
    },
    Monster {
        id: "yeti",
        name: "Yeti",
        elements: &[Element::Water, Element::Earth],
        types: [MonsterType::Tank, MonsterType::Force, MonsterType::Weakness],
        image: Some("/images/monsters/yeti.png"),
    },
    Monster {
        id: "yeti-shifted",
        name: "Shifted Yeti",
        elements: &[Element::Water, Element::Earth],
        types: [MonsterType::Tank, MonsterType::Shield, MonsterType::Burn],
        image: Some("/images/monsters/yeti-shifted.png"),
    },
];
