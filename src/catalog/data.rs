use super::Catalog;
use crate::{
    config::DEFAULT_DESTINATION,
    types::{Place, PlaceCategory},
};

pub(super) fn builtin_catalog() -> Catalog {
    let mut catalog = Catalog::new(DEFAULT_DESTINATION);

    catalog.insert(PlaceCategory::Attractions, "Paris", paris_attractions());
    catalog.insert(PlaceCategory::Restaurants, "Paris", paris_restaurants());
    catalog.insert(PlaceCategory::Hotels, "Paris", paris_hotels());

    catalog.insert(
        PlaceCategory::Attractions,
        "New York",
        new_york_attractions(),
    );
    catalog.insert(
        PlaceCategory::Restaurants,
        "New York",
        new_york_restaurants(),
    );
    catalog.insert(PlaceCategory::Hotels, "New York", new_york_hotels());

    catalog.insert(PlaceCategory::Attractions, "Tokyo", tokyo_attractions());
    catalog.insert(PlaceCategory::Restaurants, "Tokyo", tokyo_restaurants());
    catalog.insert(PlaceCategory::Hotels, "Tokyo", tokyo_hotels());

    catalog
}

fn paris_attractions() -> Vec<Place> {
    vec![
        Place::new(
            "Eiffel Tower",
            4.7,
            215_000,
            "Champ de Mars, 5 Avenue Anatole France, 75007 Paris, France",
            48.8584,
            2.2945,
        ),
        Place::new(
            "Louvre Museum",
            4.8,
            187_000,
            "Rue de Rivoli, 75001 Paris, France",
            48.8606,
            2.3376,
        ),
        Place::new(
            "Notre-Dame Cathedral",
            4.7,
            140_000,
            "6 Parvis Notre-Dame - Pl. Jean-Paul II, 75004 Paris, France",
            48.8530,
            2.3499,
        ),
        Place::new(
            "Arc de Triomphe",
            4.7,
            140_000,
            "Place Charles de Gaulle, 75008 Paris, France",
            48.8738,
            2.2950,
        ),
        Place::new(
            "Montmartre",
            4.6,
            110_000,
            "75018 Paris, France",
            48.8867,
            2.3431,
        ),
        Place::new(
            "Palace of Versailles",
            4.7,
            98_000,
            "Place d'Armes, 78000 Versailles, France",
            48.8049,
            2.1204,
        ),
    ]
}

fn paris_restaurants() -> Vec<Place> {
    vec![
        Place::new(
            "Le Jules Verne",
            4.6,
            3_200,
            "Eiffel Tower, Avenue Gustave Eiffel, 75007 Paris, France",
            48.8583,
            2.2944,
        )
        .with_price(4),
        Place::new(
            "Café de Flore",
            4.3,
            8_700,
            "172 Boulevard Saint-Germain, 75006 Paris, France",
            48.8539,
            2.3336,
        )
        .with_price(3),
        Place::new(
            "L'Ambroisie",
            4.7,
            1_200,
            "9 Place des Vosges, 75004 Paris, France",
            48.8554,
            2.3671,
        )
        .with_price(4),
        Place::new(
            "Bouillon Chartier",
            4.2,
            25_000,
            "7 Rue du Faubourg Montmartre, 75009 Paris, France",
            48.8731,
            2.3431,
        )
        .with_price(2),
        Place::new(
            "Le Comptoir du Relais",
            4.4,
            4_500,
            "9 Carrefour de l'Odéon, 75006 Paris, France",
            48.8513,
            2.3385,
        )
        .with_price(3),
    ]
}

fn paris_hotels() -> Vec<Place> {
    vec![
        Place::new(
            "Hôtel Plaza Athénée",
            4.8,
            2_100,
            "25 Avenue Montaigne, 75008 Paris, France",
            48.8661,
            2.3031,
        )
        .with_price(4),
        Place::new(
            "Le Meurice",
            4.7,
            1_800,
            "228 Rue de Rivoli, 75001 Paris, France",
            48.8651,
            2.3280,
        )
        .with_price(4),
        Place::new(
            "Hôtel de Crillon",
            4.8,
            1_500,
            "10 Place de la Concorde, 75008 Paris, France",
            48.8674,
            2.3214,
        )
        .with_price(4),
        Place::new(
            "Citadines Tour Eiffel Paris",
            4.2,
            3_200,
            "132 Boulevard de Grenelle, 75015 Paris, France",
            48.8517,
            2.2976,
        )
        .with_price(3),
        Place::new(
            "Generator Paris",
            4.1,
            5_600,
            "9-11 Place du Colonel Fabien, 75010 Paris, France",
            48.8772,
            2.3705,
        )
        .with_price(2),
    ]
}

fn new_york_attractions() -> Vec<Place> {
    vec![
        Place::new(
            "Statue of Liberty",
            4.7,
            187_000,
            "New York, NY 10004, USA",
            40.6892,
            -74.0445,
        ),
        Place::new(
            "Central Park",
            4.8,
            210_000,
            "New York, NY, USA",
            40.7812,
            -73.9665,
        ),
        Place::new(
            "Empire State Building",
            4.7,
            152_000,
            "20 W 34th St, New York, NY 10001, USA",
            40.7484,
            -73.9857,
        ),
        Place::new(
            "Times Square",
            4.7,
            195_000,
            "Manhattan, NY 10036, USA",
            40.7580,
            -73.9855,
        ),
        Place::new(
            "Metropolitan Museum of Art",
            4.8,
            98_000,
            "1000 5th Ave, New York, NY 10028, USA",
            40.7794,
            -73.9632,
        ),
        Place::new(
            "Brooklyn Bridge",
            4.8,
            87_000,
            "Brooklyn Bridge, New York, NY 10038, USA",
            40.7061,
            -73.9969,
        ),
    ]
}

fn new_york_restaurants() -> Vec<Place> {
    vec![
        Place::new(
            "Katz's Delicatessen",
            4.5,
            45_000,
            "205 E Houston St, New York, NY 10002, USA",
            40.7223,
            -73.9874,
        )
        .with_price(2),
        Place::new(
            "Peter Luger Steak House",
            4.4,
            14_000,
            "178 Broadway, Brooklyn, NY 11211, USA",
            40.7099,
            -73.9622,
        )
        .with_price(4),
        Place::new(
            "Eleven Madison Park",
            4.8,
            3_200,
            "11 Madison Ave, New York, NY 10010, USA",
            40.7416,
            -73.9872,
        )
        .with_price(4),
        Place::new(
            "Shake Shack",
            4.4,
            35_000,
            "Madison Square Park, New York, NY 10010, USA",
            40.7414,
            -73.9883,
        )
        .with_price(2),
        Place::new(
            "Le Bernardin",
            4.7,
            4_800,
            "155 W 51st St, New York, NY 10019, USA",
            40.7614,
            -73.9813,
        )
        .with_price(4),
    ]
}

fn new_york_hotels() -> Vec<Place> {
    vec![
        Place::new(
            "The Plaza",
            4.6,
            5_800,
            "768 5th Ave, New York, NY 10019, USA",
            40.7645,
            -73.9741,
        )
        .with_price(4),
        Place::new(
            "The Standard, High Line",
            4.4,
            3_200,
            "848 Washington St, New York, NY 10014, USA",
            40.7399,
            -74.0083,
        )
        .with_price(4),
        Place::new(
            "Pod 51 Hotel",
            4.0,
            4_500,
            "230 E 51st St, New York, NY 10022, USA",
            40.7559,
            -73.9709,
        )
        .with_price(2),
        Place::new(
            "The Nomad Hotel",
            4.6,
            2_100,
            "1170 Broadway, New York, NY 10001, USA",
            40.7448,
            -73.9885,
        )
        .with_price(3),
        Place::new(
            "Ace Hotel New York",
            4.4,
            3_800,
            "20 W 29th St, New York, NY 10001, USA",
            40.7456,
            -73.9881,
        )
        .with_price(3),
    ]
}

fn tokyo_attractions() -> Vec<Place> {
    vec![
        Place::new(
            "Tokyo Skytree",
            4.6,
            87_000,
            "1 Chome-1-2 Oshiage, Sumida City, Tokyo 131-0045, Japan",
            35.7101,
            139.8107,
        ),
        Place::new(
            "Senso-ji Temple",
            4.7,
            92_000,
            "2 Chome-3-1 Asakusa, Taito City, Tokyo 111-0032, Japan",
            35.7147,
            139.7966,
        ),
        Place::new(
            "Meiji Shrine",
            4.6,
            65_000,
            "1-1 Yoyogikamizonocho, Shibuya City, Tokyo 151-8557, Japan",
            35.6763,
            139.6993,
        ),
        Place::new(
            "Tokyo Imperial Palace",
            4.5,
            59_000,
            "1-1 Chiyoda, Chiyoda City, Tokyo 100-8111, Japan",
            35.6852,
            139.7528,
        ),
        Place::new(
            "Shinjuku Gyoen National Garden",
            4.6,
            45_000,
            "11 Naitomachi, Shinjuku City, Tokyo 160-0014, Japan",
            35.6851,
            139.7100,
        ),
        Place::new(
            "Shibuya Crossing",
            4.6,
            78_000,
            "2 Chome-2-1 Dogenzaka, Shibuya City, Tokyo 150-0043, Japan",
            35.6591,
            139.7005,
        ),
    ]
}

fn tokyo_restaurants() -> Vec<Place> {
    vec![
        Place::new(
            "Sukiyabashi Jiro",
            4.8,
            2_100,
            "4 Chome-2-15 Ginza, Chuo City, Tokyo 104-0061, Japan",
            35.6717,
            139.7649,
        )
        .with_price(4),
        Place::new(
            "Ichiran Shibuya",
            4.4,
            12_000,
            "1 Chome-22-7 Jinnan, Shibuya City, Tokyo 150-0041, Japan",
            35.6614,
            139.7006,
        )
        .with_price(2),
        Place::new(
            "Sushi Dai",
            4.7,
            5_600,
            "5 Chome-2-1 Tsukiji, Chuo City, Tokyo 104-0045, Japan",
            35.6654,
            139.7707,
        )
        .with_price(3),
        Place::new(
            "Gonpachi Nishi-Azabu",
            4.2,
            8_900,
            "1 Chome-13-11 Nishiazabu, Minato City, Tokyo 106-0031, Japan",
            35.6592,
            139.7215,
        )
        .with_price(3),
        Place::new(
            "Narisawa",
            4.7,
            1_800,
            "2 Chome-6-15 Minami Aoyama, Minato City, Tokyo 107-0062, Japan",
            35.6697,
            139.7223,
        )
        .with_price(4),
    ]
}

fn tokyo_hotels() -> Vec<Place> {
    vec![
        Place::new(
            "Park Hyatt Tokyo",
            4.7,
            3_200,
            "3 Chome-7-1-2 Nishishinjuku, Shinjuku City, Tokyo 163-1055, Japan",
            35.6869,
            139.6921,
        )
        .with_price(4),
        Place::new(
            "The Ritz-Carlton, Tokyo",
            4.8,
            2_100,
            "9 Chome-7-1 Akasaka, Minato City, Tokyo 107-6245, Japan",
            35.6658,
            139.7296,
        )
        .with_price(4),
        Place::new(
            "Shinjuku Granbell Hotel",
            4.2,
            4_800,
            "2 Chome-14-5 Kabukicho, Shinjuku City, Tokyo 160-0021, Japan",
            35.6956,
            139.7037,
        )
        .with_price(3),
        Place::new(
            "Hotel Gracery Shinjuku",
            4.3,
            5_600,
            "1 Chome-19-1 Kabukicho, Shinjuku City, Tokyo 160-8466, Japan",
            35.6941,
            139.7016,
        )
        .with_price(3),
        Place::new(
            "UNPLAN Kagurazaka",
            4.5,
            1_200,
            "2 Chome-14-12 Kagurazaka, Shinjuku City, Tokyo 162-0825, Japan",
            35.7015,
            139.7403,
        )
        .with_price(2),
    ]
}
