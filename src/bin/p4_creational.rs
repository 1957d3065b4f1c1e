// Pattern 4: Creational Patterns - Abstract Factory, Singleton
// Demonstrates creating objects without naming their concrete types, and a
// single lazily built shared instance.

use colored::Colorize;
use pattern_catalog::factory::{
    build_maze, cat, random_animal, BombMazeFactory, CatalogMazeFactory, EnhancedMazeFactory,
    MazeFactory, MazeStyle, PetShop, StandardMazeFactory,
};
use pattern_catalog::singleton::{self, Singleton};

// ============================================================================
// Example: Pet shop with interchangeable factories
// ============================================================================

fn pet_shop_example() {
    // A shop that sells only cats
    let mut cat_shop = PetShop::new(cat);
    for line in cat_shop.show_pet() {
        println!("{line}");
    }
    println!();

    // A shop that sells random animals
    let mut rng = rand::thread_rng();
    let mut shop = PetShop::new(move || random_animal(&mut rng));
    for _ in 0..3 {
        for line in shop.show_pet() {
            println!("{line}");
        }
        println!("{}", "=".repeat(20));
    }
}

// ============================================================================
// Example: Maze factories, one per family and one driven by a catalogue
// ============================================================================

fn maze_example() {
    let factories: [(&str, &dyn MazeFactory); 5] = [
        ("Standard", &StandardMazeFactory),
        ("Bomb", &BombMazeFactory),
        ("Enhanced", &EnhancedMazeFactory),
        ("Catalog(Bomb)", &CatalogMazeFactory::new(MazeStyle::Bomb)),
        ("Catalog(Enhanced)", &CatalogMazeFactory::new(MazeStyle::Enhanced)),
    ];

    for (name, factory) in factories {
        let [wall, room, door] = build_maze(factory);
        println!("{name:>18}: {wall}, {room}, {door}");
    }
}

// ============================================================================
// Example: Singleton with OnceLock
// ============================================================================

fn singleton_example() {
    let first = Singleton::instance();
    let second = Singleton::instance();
    let third = Singleton::instance();

    println!("x = {}", first.x());
    println!("Same instance: {}", std::ptr::eq(first, second) && std::ptr::eq(second, third));
    println!("Initializer ran {} time(s)", singleton::init_count());
}

fn main() {
    println!("Pattern 4: Creational Patterns");
    println!("==============================\n");

    println!("{}", "=== Abstract Factory (Pet Shop) ===".bold());
    pet_shop_example();
    println!();

    println!("{}", "=== Abstract Factory (Maze) ===".bold());
    maze_example();
    println!();

    println!("{}", "=== Singleton ===".bold());
    singleton_example();
}
