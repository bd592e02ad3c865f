//! Built-in case: the default mansion and its suspect table

use crate::mansion::{Direction, Mansion, MansionBuilder, MansionError};
use crate::suspect_index::SuspectIndex;

/// The suspect table of the built-in case, as `(clue, suspect)` pairs
pub const SUSPECT_TABLE: [(&str, &str); 7] = [
    ("pegada de lama", "Carlos"),
    ("lenço rasgado com monograma", "Ana"),
    ("faca com impressao parcial", "Carlos"),
    ("marcador de livro dobrado", "Beatriz"),
    ("nota ameaçadora", "Daniel"),
    ("fio de tecido azul", "Ana"),
    ("guilhotina de cabelo (fiapo)", "Beatriz"),
];

/// A mansion together with the suspect index it is judged against
#[derive(Debug, Clone)]
pub struct Case {
    /// Map to explore
    pub mansion: Mansion,
    /// Clue → suspect associations
    pub suspects: SuspectIndex,
}

impl Case {
    /// Bundle a mansion with its suspect index
    pub fn new(mansion: Mansion, suspects: SuspectIndex) -> Self {
        Self { mansion, suspects }
    }

    /// The built-in case
    pub fn builtin() -> Self {
        Self {
            mansion: builtin_mansion(),
            suspects: SuspectIndex::build(SUSPECT_TABLE),
        }
    }
}

impl Default for Case {
    fn default() -> Self {
        Self::builtin()
    }
}

/// The built-in mansion
///
/// ```text
/// Hall de Entrada
/// ├── Sala de Estar
/// │   ├── Biblioteca
/// │   └── Jardim
/// └── Corredor
///     ├── Escritório
///     └── Cozinha
///         ├── Despensa
///         └── Adega
/// ```
pub fn builtin_mansion() -> Mansion {
    // The layout is fixed, so a failure here is a programming error
    match try_builtin_mansion() {
        Ok(mansion) => mansion,
        Err(e) => unreachable!("built-in mansion is invalid: {}", e),
    }
}

fn try_builtin_mansion() -> Result<Mansion, MansionError> {
    let mut b = MansionBuilder::new();

    let hall = b.room("Hall de Entrada", Some("pegada de lama"));
    let living = b.room("Sala de Estar", Some("lenço rasgado com monograma"));
    let library = b.room("Biblioteca", Some("marcador de livro dobrado"));
    let garden = b.room("Jardim", Some("fio de tecido azul"));
    let corridor = b.room("Corredor", None);
    let office = b.room("Escritório", Some("nota ameaçadora"));
    let kitchen = b.room("Cozinha", Some("faca com impressao parcial"));
    let pantry = b.room("Despensa", Some("guilhotina de cabelo (fiapo)"));
    let cellar = b.room("Adega", Some("fio de lã cinza"));

    b.connect(hall, Direction::Left, living)?
        .connect(hall, Direction::Right, corridor)?
        .connect(living, Direction::Left, library)?
        .connect(living, Direction::Right, garden)?
        .connect(corridor, Direction::Left, office)?
        .connect(corridor, Direction::Right, kitchen)?
        .connect(kitchen, Direction::Left, pantry)?
        .connect(kitchen, Direction::Right, cellar)?;

    b.build(hall)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_mansion_shape() {
        let mansion = builtin_mansion();
        assert_eq!(mansion.len(), 9);
        assert_eq!(mansion.clue_count(), 8);
        assert_eq!(mansion[mansion.entrance()].name(), "Hall de Entrada");
    }

    #[test]
    fn test_builtin_suspect_table() {
        let case = Case::builtin();
        assert_eq!(case.suspects.len(), SUSPECT_TABLE.len());
        for (clue, suspect) in SUSPECT_TABLE {
            assert_eq!(case.suspects.lookup(clue), Some(suspect));
        }
        assert_eq!(case.suspects.suspects(), ["Ana", "Beatriz", "Carlos", "Daniel"]);
    }

    #[test]
    fn test_cellar_clue_implicates_nobody() {
        let case = Case::builtin();
        let cellar = case.mansion.find("Adega").unwrap();
        let clue = case.mansion[cellar].clue().unwrap();
        assert_eq!(case.suspects.lookup(clue.as_str()), None);
    }
}
