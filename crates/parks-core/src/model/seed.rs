//! Seed data present at process start

use super::park::Park;

/// The five Windsor, ON parks the directory starts with
pub fn windsor_parks() -> Vec<Park> {
    vec![
        Park::seed(
            "1",
            "Malden Park Dog Area",
            "3540 Malden Rd, Windsor, ON",
            4.5,
            &["Fenced", "Water Station", "Large Dogs"],
            "Large fenced area with separate sections for big and small dogs.",
        ),
        Park::seed(
            "2",
            "Jackson Park",
            "1453 Ouellette Ave, Windsor, ON",
            4.2,
            &["Open Space", "Walking Trails", "Scenic"],
            "Beautiful park with walking trails along the Detroit River.",
        ),
        Park::seed(
            "3",
            "Mic Mac Park",
            "2540 Richmond St, Windsor, ON",
            4.0,
            &["Large Area", "Baseball Diamond", "Parking"],
            "Spacious park perfect for letting dogs run and play fetch.",
        ),
        Park::seed(
            "4",
            "Little River Corridor",
            "Little River Dr, Windsor, ON",
            4.3,
            &["Trail", "Natural", "Creek Access"],
            "Natural trail system where dogs can explore and splash in the creek.",
        ),
        Park::seed(
            "5",
            "Sandpoint Beach",
            "7800 Riverside Dr E, Windsor, ON",
            3.8,
            &["Beach", "Swimming", "Leash Required"],
            "Sandy beach where leashed dogs can enjoy the water.",
        ),
    ]
}
