// Abstract factory: callers ask a factory for products and never name the
// concrete type they get back.

use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;
use rand::Rng;

// ============================================================================
// Pet shop: the factory is any closure producing a pet
// ============================================================================

pub trait Pet: fmt::Display {
    fn speak(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dog;

impl Pet for Dog {
    fn speak(&self) -> &'static str {
        "woof"
    }
}

impl fmt::Display for Dog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Dog")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cat;

impl Pet for Cat {
    fn speak(&self) -> &'static str {
        "meow"
    }
}

impl fmt::Display for Cat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Cat")
    }
}

pub fn dog() -> Box<dyn Pet> {
    Box::new(Dog)
}

pub fn cat() -> Box<dyn Pet> {
    Box::new(Cat)
}

/// Picks a dog or a cat with even odds.
pub fn random_animal<R: Rng>(rng: &mut R) -> Box<dyn Pet> {
    if rng.gen_bool(0.5) {
        dog()
    } else {
        cat()
    }
}

pub struct PetShop<F>
where
    F: FnMut() -> Box<dyn Pet>,
{
    pet_factory: F,
}

impl<F> PetShop<F>
where
    F: FnMut() -> Box<dyn Pet>,
{
    pub fn new(pet_factory: F) -> Self {
        Self { pet_factory }
    }

    pub fn set_factory(&mut self, pet_factory: F) {
        self.pet_factory = pet_factory;
    }

    /// Creates one pet and describes it.
    pub fn show_pet(&mut self) -> Vec<String> {
        let pet = (self.pet_factory)();
        vec![
            format!("We have a lovely {pet}"),
            format!("It says {}", pet.speak()),
        ]
    }
}

// ============================================================================
// Maze kit: one factory per family of parts
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MazeSite {
    Wall,
    Room,
    BombRoom,
    Door,
    EnhancedFancyDoor,
}

impl fmt::Display for MazeSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MazeSite::Wall => "Wall",
            MazeSite::Room => "Room",
            MazeSite::BombRoom => "BombRoom",
            MazeSite::Door => "Door",
            MazeSite::EnhancedFancyDoor => "EnhancedFancyDoor",
        };
        f.write_str(name)
    }
}

pub trait MazeFactory {
    fn make_wall(&self) -> MazeSite {
        MazeSite::Wall
    }

    fn make_room(&self) -> MazeSite {
        MazeSite::Room
    }

    fn make_door(&self) -> MazeSite {
        MazeSite::Door
    }
}

pub struct StandardMazeFactory;

impl MazeFactory for StandardMazeFactory {}

pub struct BombMazeFactory;

impl MazeFactory for BombMazeFactory {
    fn make_room(&self) -> MazeSite {
        MazeSite::BombRoom
    }
}

pub struct EnhancedMazeFactory;

impl MazeFactory for EnhancedMazeFactory {
    fn make_door(&self) -> MazeSite {
        MazeSite::EnhancedFancyDoor
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MazeStyle {
    Bomb,
    Enhanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MazePart {
    Wall,
    Room,
    Door,
}

lazy_static! {
    static ref MAZE_CATALOG: HashMap<MazeStyle, HashMap<MazePart, MazeSite>> = {
        let mut catalog = HashMap::new();
        catalog.insert(
            MazeStyle::Bomb,
            HashMap::from([
                (MazePart::Wall, MazeSite::Wall),
                (MazePart::Room, MazeSite::BombRoom),
                (MazePart::Door, MazeSite::Door),
            ]),
        );
        catalog.insert(
            MazeStyle::Enhanced,
            HashMap::from([
                (MazePart::Wall, MazeSite::Wall),
                (MazePart::Room, MazeSite::Room),
                (MazePart::Door, MazeSite::EnhancedFancyDoor),
            ]),
        );
        catalog
    };
}

/// A single factory type parameterized by style. New kinds of part only
/// need a catalogue entry, not a new method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogMazeFactory {
    style: MazeStyle,
}

impl CatalogMazeFactory {
    pub fn new(style: MazeStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> MazeStyle {
        self.style
    }

    pub fn make(&self, part: MazePart) -> Option<MazeSite> {
        MAZE_CATALOG
            .get(&self.style)
            .and_then(|parts| parts.get(&part))
            .copied()
    }

    fn make_or(&self, part: MazePart, fallback: MazeSite) -> MazeSite {
        self.make(part).unwrap_or(fallback)
    }
}

impl MazeFactory for CatalogMazeFactory {
    fn make_wall(&self) -> MazeSite {
        self.make_or(MazePart::Wall, MazeSite::Wall)
    }

    fn make_room(&self) -> MazeSite {
        self.make_or(MazePart::Room, MazeSite::Room)
    }

    fn make_door(&self) -> MazeSite {
        self.make_or(MazePart::Door, MazeSite::Door)
    }
}

/// Builds one wall, room and door with `factory`.
pub fn build_maze(factory: &dyn MazeFactory) -> [MazeSite; 3] {
    [factory.make_wall(), factory.make_room(), factory.make_door()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_cat_shop() {
        let mut shop = PetShop::new(cat);
        assert_eq!(shop.show_pet(), vec!["We have a lovely Cat", "It says meow"]);
    }

    #[test]
    fn test_dog_shop() {
        let mut shop = PetShop::new(dog);
        assert_eq!(shop.show_pet(), vec!["We have a lovely Dog", "It says woof"]);
    }

    #[test]
    fn test_random_shop_only_sells_dogs_and_cats() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut shop = PetShop::new(move || random_animal(&mut rng));

        for _ in 0..20 {
            let lines = shop.show_pet();
            assert!(
                lines == ["We have a lovely Dog", "It says woof"]
                    || lines == ["We have a lovely Cat", "It says meow"],
                "unexpected pet: {lines:?}"
            );
        }
    }

    #[test]
    fn test_random_animal_sees_both() {
        let mut rng = StdRng::seed_from_u64(42);
        let names: Vec<String> = (0..64).map(|_| random_animal(&mut rng).to_string()).collect();
        assert!(names.iter().any(|n| n == "Dog"));
        assert!(names.iter().any(|n| n == "Cat"));
    }

    #[test]
    fn test_counting_factory() {
        let mut made = 0;
        let mut shop = PetShop::new(|| {
            made += 1;
            dog()
        });
        shop.show_pet();
        shop.show_pet();
        drop(shop);
        assert_eq!(made, 2);
    }

    #[test]
    fn test_subclass_factories() {
        assert_eq!(
            build_maze(&StandardMazeFactory),
            [MazeSite::Wall, MazeSite::Room, MazeSite::Door]
        );
        assert_eq!(
            build_maze(&BombMazeFactory),
            [MazeSite::Wall, MazeSite::BombRoom, MazeSite::Door]
        );
        assert_eq!(
            build_maze(&EnhancedMazeFactory),
            [MazeSite::Wall, MazeSite::Room, MazeSite::EnhancedFancyDoor]
        );
    }

    #[test]
    fn test_catalog_factory_matches_subclasses() {
        assert_eq!(
            build_maze(&CatalogMazeFactory::new(MazeStyle::Bomb)),
            build_maze(&BombMazeFactory)
        );
        assert_eq!(
            build_maze(&CatalogMazeFactory::new(MazeStyle::Enhanced)),
            build_maze(&EnhancedMazeFactory)
        );
    }

    #[test]
    fn test_catalog_make() {
        let factory = CatalogMazeFactory::new(MazeStyle::Bomb);
        assert_eq!(factory.style(), MazeStyle::Bomb);
        assert_eq!(factory.make(MazePart::Room), Some(MazeSite::BombRoom));
        assert_eq!(MazeSite::EnhancedFancyDoor.to_string(), "EnhancedFancyDoor");
    }
}
