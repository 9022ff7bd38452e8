//! Built-in catalog seed data.
//!
//! In a real deployment this would come from a database; the demo ships a
//! fixed set of fifteen parts.

use partsbin_core::{Part, PartId};
use rust_decimal::Decimal;

fn part(
    id: i32,
    name: &str,
    description: &str,
    manufacturer: &str,
    price_cents: i64,
    image: &str,
) -> Part {
    Part {
        id: PartId::new(id),
        name: name.to_owned(),
        description: description.to_owned(),
        manufacturer: manufacturer.to_owned(),
        price: Decimal::new(price_cents, 2),
        image: image.to_owned(),
    }
}

pub(super) fn parts() -> Vec<Part> {
    vec![
        part(
            1,
            "Bosch Brake Pad Set",
            "Premium ceramic brake pads for optimal stopping power and reduced brake dust. Compatible with most modern vehicles.",
            "Bosch",
            8999,
            "https://m.media-amazon.com/images/I/61n9QDu9NeL._SL1500_.jpg",
        ),
        part(
            2,
            "FRAM Ultra Oil Filter",
            "Premium synthetic oil filter with 99% filtration efficiency. Extended life up to 20,000 miles.",
            "FRAM",
            1299,
            "https://m.media-amazon.com/images/I/81UGiLYnBeL._SL1500_.jpg",
        ),
        part(
            3,
            "K&N High-Flow Air Filter",
            "Washable and reusable high-flow air filter. Increases horsepower and acceleration.",
            "K&N",
            5499,
            "https://lrlmotors.com/cdn/shop/products/polo-gt-tsi-polo-dslvento-dsl-kn-replacement-air-filter-702645_1440x1440.webp?v=1649215575",
        ),
        part(
            4,
            "NGK Laser Iridium Spark Plugs",
            "Fine-wire iridium center electrode for better ignition and fuel efficiency. Set of 4.",
            "NGK",
            4599,
            "https://lrlmotors.com/cdn/shop/files/NGK_SIMR8A9_Laser_1440x1440.jpg?v=1728645080",
        ),
        part(
            5,
            "Optima RedTop Battery",
            "High-performance AGM battery with superior starting power and longer life.",
            "Optima",
            22999,
            "https://d2lum58i3w4swj.cloudfront.net/clarios/imgs/opticat/5373698.jpg",
        ),
        part(
            6,
            "Mobil 1 Extended Performance Oil Filter",
            "Advanced synthetic fiber filter media for outstanding engine protection up to 20,000 miles.",
            "Mobil 1",
            1499,
            "https://www.getuscart.com/images/thumbs/0587029_mobil-1-m1-110a-extended-performance-oil-filter_550.jpeg",
        ),
        part(
            7,
            "ACDelco Professional Alternator",
            "100% new alternator with premium brushes and bearings for longer service life.",
            "ACDelco",
            15999,
            "https://m.media-amazon.com/images/I/71Y0G4PMf0L._AC_SL1500_.jpg",
        ),
        part(
            8,
            "Monroe Quick-Strut Assembly",
            "Complete strut assembly with premium components for improved handling and comfort.",
            "Monroe",
            12999,
            "https://m.media-amazon.com/images/I/61dR9E531QL._AC_SL1500_.jpg",
        ),
        part(
            9,
            "Gates Timing Belt Kit",
            "Complete timing belt kit with water pump and installation components.",
            "Gates",
            18999,
            "https://m.media-amazon.com/images/I/41AXnYAdXoL._SY300_SX300_QL70_FMwebp_.jpg",
        ),
        part(
            10,
            "Denso Oxygen Sensor",
            "OEM-quality oxygen sensor for precise fuel management and optimal performance.",
            "Denso",
            4999,
            "https://m.media-amazon.com/images/I/61cjmHKtcAL._AC_SL1500_.jpg",
        ),
        part(
            11,
            "Moog Ball Joint",
            "Premium ball joint with powdered-metal gusher bearing design for superior strength.",
            "Moog",
            3999,
            "https://m.media-amazon.com/images/I/61HZj9JL3KL._SX522_.jpg",
        ),
        part(
            12,
            "Walker Catalytic Converter",
            "EPA-compliant catalytic converter with premium substrate material for efficient emissions control.",
            "Walker",
            29999,
            "https://m.media-amazon.com/images/I/3122HWQBVaL._SX300_SY300_QL70_FMwebp_.jpg",
        ),
        part(
            13,
            "Timken Wheel Bearing",
            "Premium wheel bearing with precision-engineered rollers for smooth operation.",
            "Timken",
            7999,
            "https://m.media-amazon.com/images/I/3122HWQBVaL._SX300_SY300_QL70_FMwebp_.jpg",
        ),
        part(
            14,
            "Dayco Serpentine Belt",
            "EPDM construction for longer belt life and quiet operation.",
            "Dayco",
            2499,
            "https://m.media-amazon.com/images/I/81ncSjWO6HL._SY879_.jpg",
        ),
        part(
            15,
            "Motorcraft Fuel Filter",
            "OEM-quality fuel filter with high filtration efficiency for Ford vehicles.",
            "Motorcraft",
            1999,
            "https://m.media-amazon.com/images/I/418ejUfy8lL._SY300_SX300_QL70_FMwebp_.jpg",
        ),
    ]
}
