//! Built-in name pools, one per catalog locale.
//!
//! Pools deliberately keep native spelling (diacritics, particles, compound
//! surnames) so generated persons exercise MRZ transliteration.

use traveldoc_core::{Gender, SupportedCountry};

/// First and last names for one locale.
#[derive(Debug, Clone, Copy)]
pub struct NamePool {
    /// Locale tag, e.g. `pt_PT`.
    pub locale: &'static str,
    /// Male first names.
    pub male: &'static [&'static str],
    /// Female first names.
    pub female: &'static [&'static str],
    /// Family names.
    pub surnames: &'static [&'static str],
}

impl NamePool {
    /// First names for `gender`. `Unspecified` returns `None`; the caller
    /// draws from both lists.
    pub fn first_names(&self, gender: Gender) -> Option<&'static [&'static str]> {
        match gender {
            Gender::Male => Some(self.male),
            Gender::Female => Some(self.female),
            Gender::Unspecified => None,
        }
    }
}

const PT_PT: NamePool = NamePool {
    locale: "pt_PT",
    male: &[
        "João", "Tiago", "Gonçalo", "Rodrigo", "Martim", "Duarte", "Afonso", "Tomás", "Simão",
        "Lourenço", "Rafael", "Diogo", "André", "Vicente",
    ],
    female: &[
        "Maria", "Beatriz", "Leonor", "Matilde", "Inês", "Carolina", "Mariana", "Ana", "Constança",
        "Francisca", "Margarida", "Lúcia", "Sofia", "Joana",
    ],
    surnames: &[
        "Silva", "Santos", "Ferreira", "Pereira", "Oliveira", "Costa", "Rodrigues", "Martins",
        "Jesus", "Sousa", "Fernandes", "Gonçalves", "Gomes", "Lopes", "Marques", "Barbosa",
        "Conceição", "Simões", "Magalhães", "da Cunha",
    ],
};

const ES: NamePool = NamePool {
    locale: "es",
    male: &[
        "Hugo", "Martín", "Lucas", "Mateo", "Leo", "Daniel", "Alejandro", "Pablo", "Álvaro",
        "Adrián", "Iñigo", "Sergio", "Jesús", "Ramón",
    ],
    female: &[
        "Lucía", "Sofía", "Martina", "María", "Julia", "Paula", "Valeria", "Emma", "Daniela",
        "Carla", "Begoña", "Inés", "Nuria", "Ainhoa",
    ],
    surnames: &[
        "García", "Rodríguez", "González", "Fernández", "López", "Martínez", "Sánchez", "Pérez",
        "Gómez", "Martín", "Jiménez", "Ruiz", "Hernández", "Díaz", "Muñoz", "Álvarez", "Ibáñez",
        "Peña", "de la Fuente", "Núñez",
    ],
};

const EN_GB: NamePool = NamePool {
    locale: "en_GB",
    male: &[
        "Oliver", "George", "Harry", "Noah", "Jack", "Leo", "Arthur", "Oscar", "Hayden", "Charlie",
        "Freddie", "Alfie", "Theo", "Rhys",
    ],
    female: &[
        "Olivia", "Amelia", "Isla", "Ava", "Mia", "Ivy", "Lily", "Isabella", "Rosie", "Sophia",
        "Grace", "Stella", "Zoë", "Siobhan",
    ],
    surnames: &[
        "Smith", "Jones", "Williams", "Taylor", "Brown", "Davies", "Evans", "Wilson", "Thomas",
        "Johnson", "Roberts", "Robinson", "Thompson", "Wright", "Walker", "White", "Stone",
        "Malby", "O'Brien", "Ffrench-Mullen",
    ],
};

const FR: NamePool = NamePool {
    locale: "fr",
    male: &[
        "Gabriel", "Léo", "Raphaël", "Arthur", "Louis", "Jules", "Adam", "Maël", "Lucas", "Hugo",
        "Noé", "Théo", "Loïc", "Jérôme",
    ],
    female: &[
        "Jade", "Louise", "Emma", "Alice", "Ambre", "Lina", "Rose", "Chloé", "Léa", "Mila", "Anaïs",
        "Hélène", "Éloïse", "Cécile",
    ],
    surnames: &[
        "Martin", "Bernard", "Dubois", "Thomas", "Robert", "Richard", "Petit", "Durand", "Leroy",
        "Moreau", "Simon", "Laurent", "Lefèvre", "Michel", "Garcia", "Fournier", "Lefébure",
        "Bœuf", "Saint-Étienne", "Lemaître",
    ],
};

/// The name pool for `country`'s locale.
pub fn pool_for(country: SupportedCountry) -> &'static NamePool {
    match country {
        SupportedCountry::Portugal => &PT_PT,
        SupportedCountry::Spain => &ES,
        SupportedCountry::UnitedKingdom => &EN_GB,
        SupportedCountry::France => &FR,
    }
}
