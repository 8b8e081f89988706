//! Sample catalog loaded at startup when `store.seed_sample_data` is set

use chrono::Utc;

use super::{new_id, Repository};
use crate::models::{Category, Equipment};

struct SampleListing {
    name: &'static str,
    category: Category,
    description: &'static str,
    image_url: &'static str,
    price_per_day: i32,
    price_per_hour: i32,
    location: &'static str,
    owner_name: &'static str,
    owner_contact: &'static str,
    condition: &'static str,
    year: i32,
    brand: &'static str,
    specifications: &'static str,
    rating: i32,
    review_count: i32,
}

const SAMPLES: &[SampleListing] = &[
    SampleListing {
        name: "John Deere 5310 Tractor",
        category: Category::Tractors,
        description: "Premium 55 HP tractor with 4WD drive system. Perfect for all farming operations including plowing, tilling, and hauling. Well-maintained and serviced regularly. Includes basic implements.",
        image_url: "https://images.unsplash.com/photo-1625246333195-78d9c38ad449?w=800&auto=format&fit=crop",
        price_per_day: 2500,
        price_per_hour: 350,
        location: "Pune, Maharashtra",
        owner_name: "Rajesh Patil",
        owner_contact: "+91 98765 43210",
        condition: "Excellent",
        year: 2021,
        brand: "John Deere",
        specifications: "55 HP Engine\n4WD Drive System\nHydraulic Lift Capacity: 1600 kg\nPower Steering\nComfortable Operator Seat",
        rating: 5,
        review_count: 24,
    },
    SampleListing {
        name: "Mahindra Arjun 605 DI",
        category: Category::Tractors,
        description: "Powerful 60 HP tractor suitable for heavy-duty farming. Features modern technology and excellent fuel efficiency. Ideal for large farms and intensive agricultural work.",
        image_url: "https://images.unsplash.com/photo-1589479218876-f0f29f08a0b5?w=800&auto=format&fit=crop",
        price_per_day: 2800,
        price_per_hour: 400,
        location: "Nashik, Maharashtra",
        owner_name: "Suresh Kumar",
        owner_contact: "+91 98234 56789",
        condition: "Good",
        year: 2020,
        brand: "Mahindra",
        specifications: "60 HP Engine\n2200 kg Lifting Capacity\nMulti-speed Gearbox\nOil-immersed Brakes\nFuel Efficient Engine",
        rating: 5,
        review_count: 18,
    },
    SampleListing {
        name: "New Holland TC5070 Combine Harvester",
        category: Category::Harvesters,
        description: "Advanced combine harvester with efficient grain collection and minimal losses. Perfect for wheat, rice, and other cereal crops. Large grain tank capacity.",
        image_url: "https://images.unsplash.com/photo-1574787342711-18ca3b6937d3?w=800&auto=format&fit=crop",
        price_per_day: 8500,
        price_per_hour: 0,
        location: "Ludhiana, Punjab",
        owner_name: "Harpreet Singh",
        owner_contact: "+91 98456 78901",
        condition: "Excellent",
        year: 2022,
        brand: "New Holland",
        specifications: "175 HP Engine\nCutting Width: 4.2 meters\nGrain Tank: 4500 liters\nAdvanced Threshing System\nAir-conditioned Cabin",
        rating: 5,
        review_count: 12,
    },
    SampleListing {
        name: "Swaraj 855 FE Tractor",
        category: Category::Tractors,
        description: "Reliable 58 HP tractor known for durability and low maintenance. Perfect for medium-sized farms. Comes with rotavator attachment included in rental.",
        image_url: "https://images.unsplash.com/photo-1504909781568-e42b4fb32fc5?w=800&auto=format&fit=crop",
        price_per_day: 2200,
        price_per_hour: 300,
        location: "Jaipur, Rajasthan",
        owner_name: "Vikram Sharma",
        owner_contact: "+91 97654 32109",
        condition: "Good",
        year: 2019,
        brand: "Swaraj",
        specifications: "58 HP Engine\n1800 kg Lift Capacity\nDual Clutch\n8 Forward + 2 Reverse Gears\nRotavator Included",
        rating: 4,
        review_count: 31,
    },
    SampleListing {
        name: "Kubota Combine Harvester",
        category: Category::Harvesters,
        description: "Compact and efficient harvester ideal for small to medium farms. Easy to operate with excellent maneuverability in tight spaces. Suitable for various crops.",
        image_url: "https://images.unsplash.com/photo-1628618758384-5b68e0f77823?w=800&auto=format&fit=crop",
        price_per_day: 6500,
        price_per_hour: 0,
        location: "Coimbatore, Tamil Nadu",
        owner_name: "Murugan Krishnan",
        owner_contact: "+91 96543 21098",
        condition: "Good",
        year: 2020,
        brand: "Kubota",
        specifications: "140 HP Engine\n3.5 meter Cutting Width\n3000 liter Grain Tank\nLow Grain Loss System\nEasy Maintenance",
        rating: 4,
        review_count: 15,
    },
    SampleListing {
        name: "Rainbird Sprinkler Irrigation System",
        category: Category::IrrigationSystems,
        description: "Complete drip irrigation system covering up to 5 acres. Energy efficient with timer controls. Includes mainline, sub-mains, drippers, and all fittings.",
        image_url: "https://images.unsplash.com/photo-1592982537447-7440770cbfc9?w=800&auto=format&fit=crop",
        price_per_day: 1500,
        price_per_hour: 0,
        location: "Belgaum, Karnataka",
        owner_name: "Prakash Desai",
        owner_contact: "+91 95432 10987",
        condition: "Excellent",
        year: 2021,
        brand: "Rainbird",
        specifications: "Coverage: Up to 5 acres\nAutomatic Timer Control\nPressure Regulator Included\nComplete Drip System\nEnergy Efficient Pump",
        rating: 5,
        review_count: 8,
    },
    SampleListing {
        name: "Rotary Tiller Heavy Duty",
        category: Category::Tillers,
        description: "Professional grade rotary tiller for soil preparation. Suitable for both wet and dry land. Multiple speed options and adjustable working depth.",
        image_url: "https://images.unsplash.com/photo-1589479218876-f0f29f08a0b5?w=800&auto=format&fit=crop",
        price_per_day: 1800,
        price_per_hour: 250,
        location: "Indore, Madhya Pradesh",
        owner_name: "Ramesh Patel",
        owner_contact: "+91 94321 09876",
        condition: "Good",
        year: 2020,
        brand: "Lemken",
        specifications: "Working Width: 180 cm\nPTO Driven\nAdjustable Depth Control\nHeavy Duty Blades\nSuitable for 45+ HP Tractors",
        rating: 4,
        review_count: 22,
    },
    SampleListing {
        name: "Professional Farming Tool Kit",
        category: Category::HandTools,
        description: "Complete set of essential hand tools for farming. Includes shovels, hoes, rakes, pruning shears, and more. All tools are high quality and well-maintained.",
        image_url: "https://images.unsplash.com/photo-1416879595882-3373a0480b5b?w=800&auto=format&fit=crop",
        price_per_day: 400,
        price_per_hour: 0,
        location: "Ahmedabad, Gujarat",
        owner_name: "Kiran Joshi",
        owner_contact: "+91 93210 98765",
        condition: "Excellent",
        year: 2022,
        brand: "Fiskars",
        specifications: "Garden Spade\nDigging Fork\nGarden Rake\nHoe\nPruning Shears\nHand Trowel\nCarrying Bag Included",
        rating: 5,
        review_count: 45,
    },
    SampleListing {
        name: "Seed Drill Planter Machine",
        category: Category::Seeders,
        description: "Precision seed planter for multiple crops. Ensures uniform spacing and depth for optimal germination. Compatible with standard tractors.",
        image_url: "https://images.unsplash.com/photo-1574787342711-18ca3b6937d3?w=800&auto=format&fit=crop",
        price_per_day: 2000,
        price_per_hour: 0,
        location: "Jalandhar, Punjab",
        owner_name: "Gurpreet Kaur",
        owner_contact: "+91 92109 87654",
        condition: "Good",
        year: 2021,
        brand: "Mahindra",
        specifications: "9 Row Planter\nAdjustable Row Spacing\nMetering System\nFertilizer Attachment\nSuitable for Multiple Crops",
        rating: 4,
        review_count: 11,
    },
    SampleListing {
        name: "Mini Power Tiller",
        category: Category::Tillers,
        description: "Compact power tiller perfect for small farms and kitchen gardens. Easy to maneuver and operate. Fuel efficient with low maintenance requirements.",
        image_url: "https://images.unsplash.com/photo-1625246333195-78d9c38ad449?w=800&auto=format&fit=crop",
        price_per_day: 800,
        price_per_hour: 120,
        location: "Kolkata, West Bengal",
        owner_name: "Debashis Sen",
        owner_contact: "+91 91098 76543",
        condition: "Excellent",
        year: 2022,
        brand: "Honda",
        specifications: "5.5 HP Engine\nWorking Width: 60 cm\nReverse Gear\nAdjustable Handle\nLightweight Design",
        rating: 5,
        review_count: 19,
    },
    SampleListing {
        name: "Sprayer Pump Agricultural",
        category: Category::IrrigationSystems,
        description: "High-pressure agricultural sprayer for pesticides and fertilizers. Large tank capacity with adjustable nozzles for different spray patterns.",
        image_url: "https://images.unsplash.com/photo-1592982537447-7440770cbfc9?w=800&auto=format&fit=crop",
        price_per_day: 600,
        price_per_hour: 100,
        location: "Hyderabad, Telangana",
        owner_name: "Venkat Reddy",
        owner_contact: "+91 90987 65432",
        condition: "Good",
        year: 2021,
        brand: "Neptune",
        specifications: "Tank Capacity: 500 liters\nPressure Range: 5-20 bar\nAdjustable Nozzles\nPTO/Engine Driven\nCorrosion Resistant",
        rating: 4,
        review_count: 14,
    },
    SampleListing {
        name: "Grain Storage Silo (10 Ton)",
        category: Category::StorageEquipment,
        description: "Weather-proof grain storage silo with moisture control. Protects harvest from pests and weather damage. Ideal for long-term storage of cereals.",
        image_url: "https://images.unsplash.com/photo-1504909781568-e42b4fb32fc5?w=800&auto=format&fit=crop",
        price_per_day: 500,
        price_per_hour: 0,
        location: "Bareilly, Uttar Pradesh",
        owner_name: "Ajay Singh",
        owner_contact: "+91 89876 54321",
        condition: "Excellent",
        year: 2022,
        brand: "Silos Cordoba",
        specifications: "Capacity: 10 Tons\nWeather Proof\nRodent Protection\nVentilation System\nEasy Loading/Unloading",
        rating: 5,
        review_count: 6,
    },
];

impl Repository {
    /// Load the sample catalog. Sample listings keep their review history.
    pub fn seed_sample_data(&self) {
        for sample in SAMPLES {
            self.equipment_insert(Equipment {
                id: new_id(),
                name: sample.name.to_string(),
                category: sample.category,
                description: sample.description.to_string(),
                image_url: sample.image_url.to_string(),
                price_per_day: sample.price_per_day,
                price_per_hour: Some(sample.price_per_hour),
                location: sample.location.to_string(),
                owner_name: sample.owner_name.to_string(),
                owner_contact: sample.owner_contact.to_string(),
                condition: sample.condition.to_string(),
                year: Some(sample.year),
                brand: Some(sample.brand.to_string()),
                specifications: Some(sample.specifications.to_string()),
                is_available: "true".to_string(),
                rating: sample.rating,
                review_count: sample.review_count,
                created_at: Utc::now(),
            });
        }
        tracing::info!("Seeded {} sample equipment listings", SAMPLES.len());
    }
}
