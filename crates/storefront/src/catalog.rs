//! Reference product catalog.
//!
//! Written to storage the first time the catalog is read (see
//! [`Storage::products`](crate::storage::Storage::products)); from then on
//! the stored copy is the source of truth.

use flora_core::{Price, ProductId};

use crate::models::{Category, Product};

struct Entry {
    id: &'static str,
    name: &'static str,
    price: u32,
    image: &'static str,
    category: Category,
    occasion: &'static [&'static str],
    flowers: &'static [&'static str],
    rating: f64,
    reviews: u32,
    description: &'static str,
    seller: &'static str,
    size: &'static str,
}

const ARBAT: &str = "Arbat Flowers Boutique";
const LIGOVSKY: &str = "Flower Loft Ligovsky";
const NEVSKY: &str = "Nevsky Garden Studio";
const PATRIARCH: &str = "Patriarch Ponds Workshop";
const KREMLIN: &str = "Kremlin Flowers Market";
const EASTERN: &str = "Eastern Bouquet";
const DEMO: &str = "Demo Flowers";
const COCOA: &str = "Cocoa & Flowers Confectionery";

#[rustfmt::skip]
const ENTRIES: &[Entry] = &[
    // Bouquets
    Entry { id: "1", name: "White Dawn bouquet", price: 86, image: "🌼", category: Category::Bouquets, occasion: &["Birthday", "Anniversary"], flowers: &["Roses", "Lilies"], rating: 4.9, reviews: 24, description: "White blooms with lemon accents in an airy arrangement.", seller: "Lilies at Patriarch Ponds", size: "Medium" },
    Entry { id: "2", name: "Azure Wave bouquet", price: 90, image: "💐", category: Category::Bouquets, occasion: &["Wedding", "Anniversary"], flowers: &["Tulips", "Hyacinths"], rating: 4.9, reviews: 107, description: "Blue and milky buds for festive occasions.", seller: ARBAT, size: "Premium" },
    Entry { id: "3", name: "Royal Peony bouquet", price: 95, image: "🌹", category: Category::Bouquets, occasion: &["Valentine", "Anniversary"], flowers: &["Roses", "Peonies"], rating: 4.8, reviews: 84, description: "Deep pink peonies and garden roses in velvet wrapping.", seller: LIGOVSKY, size: "Large" },
    Entry { id: "4", name: "Sunset Fire bouquet", price: 110, image: "🌺", category: Category::Bouquets, occasion: &["Birthday", "Graduation"], flowers: &["Sunflowers", "Daisies"], rating: 4.7, reviews: 52, description: "Sunflowers and gerberas against soft pastel tones.", seller: NEVSKY, size: "Large" },
    Entry { id: "5", name: "Vanilla Tenderness bouquet", price: 98, image: "🌷", category: Category::Bouquets, occasion: &["Wedding", "Anniversary"], flowers: &["Lilies", "Baby Breath"], rating: 4.8, reviews: 91, description: "Ivory lilies with gypsophila and cotton stems.", seller: PATRIARCH, size: "Medium" },
    Entry { id: "6", name: "Northern Lights bouquet", price: 105, image: "🤍", category: Category::Bouquets, occasion: &["Wedding", "Anniversary", "Valentine"], flowers: &["White Roses", "Lilies"], rating: 4.9, reviews: 145, description: "Snow-white heart-shaped arrangement with silver decor.", seller: NEVSKY, size: "Premium" },
    Entry { id: "7", name: "Emerald Morning bouquet", price: 120, image: "🌈", category: Category::Bouquets, occasion: &["Birthday", "Graduation"], flowers: &["Mixed Seasonal"], rating: 4.8, reviews: 123, description: "A bright seasonal mix with green accents.", seller: ARBAT, size: "Large" },
    Entry { id: "8", name: "Scarlet Legends bouquet", price: 125, image: "🌹", category: Category::Bouquets, occasion: &["Valentine", "Anniversary"], flowers: &["Red Roses"], rating: 4.9, reviews: 203, description: "Classic red roses tied with a velvet ribbon.", seller: KREMLIN, size: "Large" },
    Entry { id: "9", name: "Spring Garden bouquet", price: 75, image: "🌷", category: Category::Bouquets, occasion: &["Birthday", "Housewarming"], flowers: &["Tulips"], rating: 4.7, reviews: 64, description: "Pastel tulips of several varieties in kraft wrapping.", seller: LIGOVSKY, size: "Medium" },
    Entry { id: "10", name: "Lilac Mist bouquet", price: 115, image: "🌸", category: Category::Bouquets, occasion: &["Spring", "Anniversary", "Birthday"], flowers: &["Cherry Blossoms"], rating: 4.9, reviews: 67, description: "Sakura branches and peony roses with a summer scent.", seller: KREMLIN, size: "Medium" },
    // Indoor plants
    Entry { id: "11", name: "City Garden ficus", price: 126, image: "🌿", category: Category::Indoor, occasion: &["Housewarming"], flowers: &["House Plants"], rating: 4.8, reviews: 38, description: "A tall air-purifying ficus in a milk-white planter.", seller: KREMLIN, size: "Large" },
    Entry { id: "12", name: "White Silk orchid", price: 68, image: "🪷", category: Category::Indoor, occasion: &["Anniversary", "Housewarming"], flowers: &["Orchids"], rating: 4.9, reviews: 88, description: "Two-tone phalaenopsis orchid in a ceramic pot.", seller: PATRIARCH, size: "Medium" },
    Entry { id: "13", name: "Lavender bush", price: 45, image: "🌿", category: Category::Indoor, occasion: &["Housewarming"], flowers: &["Lavender"], rating: 4.7, reviews: 41, description: "Fragrant lavender for a balcony or kitchen, fertilizer included.", seller: EASTERN, size: "Small" },
    Entry { id: "14", name: "Mini Garden succulents", price: 35, image: "🌵", category: Category::Indoor, occasion: &["Housewarming"], flowers: &["Succulents"], rating: 4.8, reviews: 127, description: "Five succulents arranged in a concrete planter.", seller: LIGOVSKY, size: "Set" },
    Entry { id: "15", name: "Amalfi lemon tree", price: 246, image: "🍋", category: Category::Indoor, occasion: &["Housewarming", "Birthday"], flowers: &["House Plants"], rating: 4.9, reviews: 25, description: "A compact citrus tree bearing fruit and a fresh scent.", seller: KREMLIN, size: "Large" },
    Entry { id: "16", name: "Lucky bamboo", price: 42, image: "🎋", category: Category::Indoor, occasion: &["Housewarming", "New Year"], flowers: &["Bamboo"], rating: 4.6, reviews: 89, description: "Traditional bamboo in a glass vase with sea pebbles.", seller: NEVSKY, size: "Medium" },
    Entry { id: "17", name: "Soft cactus collection", price: 48, image: "🌵", category: Category::Indoor, occasion: &["Housewarming"], flowers: &["Cacti"], rating: 4.7, reviews: 156, description: "Three low-maintenance cacti in matte pots.", seller: LIGOVSKY, size: "Set" },
    Entry { id: "18", name: "Herb garden set", price: 55, image: "🌿", category: Category::Indoor, occasion: &["Housewarming", "Birthday"], flowers: &["Herbs"], rating: 4.9, reviews: 134, description: "Basil, mint and rosemary in separate pots with trays.", seller: ARBAT, size: "Set" },
    // Accessories
    Entry { id: "19", name: "Gallery crystal vase", price: 65, image: "🏺", category: Category::Accessories, occasion: &["Wedding", "Anniversary"], flowers: &[], rating: 4.8, reviews: 42, description: "A tall hand-engraved vase of blown glass.", seller: PATRIARCH, size: "Medium" },
    Entry { id: "20", name: "Pastel ceramic vases", price: 85, image: "🫖", category: Category::Accessories, occasion: &["Housewarming", "Birthday"], flowers: &[], rating: 4.7, reviews: 28, description: "Three pastel vases for minimalist interiors.", seller: EASTERN, size: "Set" },
    Entry { id: "21", name: "Loft metal vase", price: 55, image: "⚱️", category: Category::Accessories, occasion: &["Housewarming"], flowers: &[], rating: 4.9, reviews: 19, description: "Matte metal with geometric embossing for dried flowers.", seller: NEVSKY, size: "Large" },
    Entry { id: "22", name: "Ribbons and bows set", price: 12, image: "🎀", category: Category::Accessories, occasion: &["Wedding", "Birthday"], flowers: &[], rating: 4.6, reviews: 38, description: "Sixteen shades of satin ribbon and ready-made bows.", seller: LIGOVSKY, size: "Set" },
    Entry { id: "23", name: "Garden scented candles", price: 32, image: "🕯️", category: Category::Accessories, occasion: &["Housewarming", "Anniversary"], flowers: &[], rating: 4.8, reviews: 71, description: "Candles scented with jasmine, vanilla and fresh greens.", seller: ARBAT, size: "Set" },
    Entry { id: "24", name: "Starter florist kit", price: 45, image: "🧰", category: Category::Accessories, occasion: &["Birthday"], flowers: &[], rating: 4.7, reviews: 56, description: "Scissors, pruner and wire in a fabric case.", seller: KREMLIN, size: "Set" },
    Entry { id: "25", name: "Modern plant hanger", price: 28, image: "🪑", category: Category::Accessories, occasion: &["Housewarming"], flowers: &[], rating: 4.6, reviews: 54, description: "Macrame hanger with wooden beads for pots up to 20 cm.", seller: NEVSKY, size: "Standard" },
    Entry { id: "26", name: "Flower Rain diffuser", price: 38, image: "🕯️", category: Category::Accessories, occasion: &["Housewarming", "Anniversary"], flowers: &[], rating: 4.9, reviews: 167, description: "Glass bottle with reed sticks and a peony scent.", seller: LIGOVSKY, size: "Standard" },
    // Gifts
    Entry { id: "27", name: "Premium gift card", price: 100, image: "💳", category: Category::Gifts, occasion: &["Birthday", "Anniversary", "Valentine"], flowers: &[], rating: 5.0, reviews: 156, description: "A card for any amount with a personal message.", seller: DEMO, size: "Standard" },
    Entry { id: "28", name: "Warmth handmade card", price: 8, image: "💌", category: Category::Gifts, occasion: &["Birthday", "Anniversary", "Valentine"], flowers: &[], rating: 4.9, reviews: 89, description: "Handmade card on textured paper with foil stamping.", seller: "Arbat Letters Studio", size: "Standard" },
    Entry { id: "29", name: "Vanilla gift box", price: 25, image: "🎁", category: Category::Gifts, occasion: &["Birthday", "Anniversary"], flowers: &[], rating: 4.8, reviews: 67, description: "Hat box with a silk ribbon and a greeting card.", seller: EASTERN, size: "Standard" },
    Entry { id: "30", name: "Handmade chocolate", price: 35, image: "🍫", category: Category::Gifts, occasion: &["Valentine", "Birthday", "Anniversary"], flowers: &[], rating: 4.9, reviews: 124, description: "Assorted truffles with berries and nuts, no added sugar.", seller: COCOA, size: "Medium" },
    Entry { id: "31", name: "Lavender and linden honey set", price: 28, image: "🍯", category: Category::Gifts, occasion: &["Housewarming", "Birthday"], flowers: &[], rating: 4.8, reviews: 45, description: "Two natural honeys with a wooden dipper.", seller: KREMLIN, size: "Set" },
    Entry { id: "32", name: "Teddy bear with bouquet", price: 45, image: "🧸", category: Category::Gifts, occasion: &["Valentine", "Birthday"], flowers: &[], rating: 4.8, reviews: 92, description: "A 35 cm plush toy holding a mini cotton bouquet.", seller: DEMO, size: "Medium" },
    Entry { id: "33", name: "Flower tea collection", price: 32, image: "🫖", category: Category::Gifts, occasion: &["Birthday", "Housewarming"], flowers: &[], rating: 4.7, reviews: 98, description: "Six teas with rose, jasmine and cornflower petals.", seller: NEVSKY, size: "Set" },
    Entry { id: "34", name: "Home Spa aroma set", price: 45, image: "🌹", category: Category::Gifts, occasion: &["Valentine", "Anniversary"], flowers: &[], rating: 4.9, reviews: 201, description: "Bath foam, hand cream and a rose-petal bath bomb.", seller: ARBAT, size: "Set" },
    Entry { id: "35", name: "Fleur perfume set", price: 65, image: "🌺", category: Category::Gifts, occasion: &["Valentine", "Anniversary", "Birthday"], flowers: &[], rating: 4.8, reviews: 178, description: "Three mini fragrances with peony, magnolia and musk notes.", seller: COCOA, size: "Set" },
    Entry { id: "36", name: "Sweet Garden gift set", price: 38, image: "🧁", category: Category::Gifts, occasion: &["Birthday", "Celebration"], flowers: &[], rating: 4.8, reviews: 73, description: "Marmalade, marshmallow and meringues with floral decor.", seller: DEMO, size: "Set" },
];

/// Build the reference catalog.
#[must_use]
pub fn reference_catalog() -> Vec<Product> {
    ENTRIES
        .iter()
        .map(|e| Product {
            id: ProductId::new(e.id),
            name: e.name.to_string(),
            price: Price::from_units(e.price),
            image: e.image.to_string(),
            category: e.category,
            occasion: e.occasion.iter().map(ToString::to_string).collect(),
            flowers: e.flowers.iter().map(ToString::to_string).collect(),
            rating: e.rating,
            reviews_count: e.reviews,
            description: e.description.to_string(),
            seller: Some(e.seller.to_string()),
            size: Some(e.size.to_string()),
        })
        .collect()
}
