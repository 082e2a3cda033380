//! French texts for the Elias Thorne case.

use casefile_core::catalog::{Catalog, ClueTable, Location};

/// Clue titles, in emission order.
pub const CLUE_TITLES: ClueTable = &[
    ("c1", "Seringue trouvée près du corps"),
    ("c2", "Morphine détectée dans le sang"),
    ("c3", "Marques d'injection au bras gauche"),
    ("c4", "Elias était gaucher"),
    ("c5", "Injection au mauvais bras (contradiction)"),
    ("c8", "Reçu d'achat du champagne"),
    ("c11", "Contrat de rupture de contrat"),
    ("c12", "Marcus Vane était l'agent"),
    ("c14", "Lettre signée par Sarah Jenkins"),
    ("c21", "Piqûre d'assurance"),
    ("c23", "Billet d'avion trouvé"),
    ("c30", "Témoin du changement"),
];

/// Clue descriptions.
pub const CLUE_DESCRIPTIONS: ClueTable = &[
    (
        "c1",
        "Une seringue médicale vide trouvée à proximité du corps d'Elias. Elle contient des traces de morphine.",
    ),
    (
        "c2",
        "Le rapport toxicologique révèle une concentration élevée de morphine dans le sang de la victime.",
    ),
    (
        "c3",
        "Des marques d'injection récentes sont visibles sur le bras gauche d'Elias.",
    ),
    (
        "c4",
        "Selon les témoignages et les observations, Elias Thorne était gaucher de naissance.",
    ),
    (
        "c5",
        "L'injection a été faite au bras gauche, ce qui est inhabituel pour un gaucher qui se serait auto-administré une substance.",
    ),
    (
        "c8",
        "Un reçu d'achat d'une bouteille de champagne rare datant du soir du décès.",
    ),
    (
        "c11",
        "Un document officiel de rupture de contrat entre Elias et son agent Marcus Vane.",
    ),
    (
        "c12",
        "Marcus Vane était l'agent artistique d'Elias depuis 5 ans et gérait sa carrière.",
    ),
    (
        "c14",
        "Une lettre d'amour déchirée, signée par Sarah Jenkins, l'ex-compagne d'Elias.",
    ),
    (
        "c21",
        "Enregistrement vidéo de surveillance montrant des mouvements suspects le soir du décès.",
    ),
    (
        "c23",
        "Un billet d'avion pour l'Italie au nom d'Elias, prévu pour la semaine suivant son décès.",
    ),
    (
        "c30",
        "Témoignage du notaire concernant une modification récente du testament d'Elias.",
    ),
];

/// Document contents.
pub const CLUE_CONTENTS: ClueTable = &[
    (
        "c2",
        "Rapport toxicologique : Concentration de morphine : 450 mg/L (dose létale). Heure estimée de l'injection : 22h30.",
    ),
    (
        "c8",
        "Reçu Cave Prestige - Champagne Dom Pérignon 1996 - 450€ - Payé en espèces - 20h15",
    ),
];

/// Locations, in emission order.
pub const LOCATIONS: &[Location] = &[
    Location {
        id: "loc1",
        name: "La Loge d'Elias",
        description: "La loge privée où Elias a été retrouvé mort. Une pièce élégante avec un piano à queue et des souvenirs de sa carrière.",
    },
    Location {
        id: "loc2",
        name: "Bureau de l'Agent Marcus Vane",
        description: "Le bureau professionnel de Marcus Vane, agent artistique. Des contrats et documents financiers sont éparpillés.",
    },
    Location {
        id: "loc3",
        name: "Appartement d'Elias",
        description: "L'appartement personnel d'Elias Thorne, révélant des aspects intimes de sa vie.",
    },
    Location {
        id: "loc4",
        name: "Coulisses du Club",
        description: "Les coulisses du club de jazz où Elias se produisait régulièrement.",
    },
    Location {
        id: "loc5",
        name: "Bureau du Directeur",
        description: "Le bureau du directeur du club, contenant des archives et des enregistrements de surveillance.",
    },
    Location {
        id: "loc6",
        name: "Appartement de Sarah Jenkins",
        description: "L'appartement de Sarah Jenkins, l'ex-compagne d'Elias.",
    },
    Location {
        id: "loc7",
        name: "Clinique du Dr. Aris Thorne",
        description: "La clinique privée du Dr. Aris Thorne, frère d'Elias et médecin.",
    },
];

/// Returns the French catalog.
#[must_use]
pub fn french_catalog() -> Catalog {
    Catalog {
        clue_titles: CLUE_TITLES,
        clue_descriptions: CLUE_DESCRIPTIONS,
        clue_contents: CLUE_CONTENTS,
        locations: LOCATIONS,
    }
}

#[cfg(test)]
mod tests {
    use super::french_catalog;

    #[test]
    fn test_french_catalog_table_sizes() {
        let catalog = french_catalog();

        assert_eq!(catalog.clue_titles.len(), 12);
        assert_eq!(catalog.clue_descriptions.len(), 12);
        assert_eq!(catalog.clue_contents.len(), 2);
        assert_eq!(catalog.locations.len(), 7);
    }

    #[test]
    fn test_french_catalog_first_clue() {
        let catalog = french_catalog();

        assert_eq!(catalog.clue_titles[0], ("c1", "Seringue trouvée près du corps"));
        assert!(catalog.content("c1").is_none());
        assert!(catalog.content("c2").is_some());
    }
}
