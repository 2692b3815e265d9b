//! "Find me" destinations and the random pick between them.

#[cfg(test)]
#[path = "find_me_test.rs"]
mod find_me_test;

use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Location {
    pub label: &'static str,
    pub url: &'static str,
}

pub const LOCATIONS: [Location; 5] = [
    Location {
        label: "43.5˚N, 79.4˚W",
        url: "https://www.google.com/maps/place/43%C2%B030'00.0%22N+79%C2%B024'00.0%22W/",
    },
    Location { label: "a very very dark place", url: "https://ssh.cloud.google.com/cloudshell" },
    Location { label: "github", url: "https://github.com/chenzizhao" },
    Location { label: "linkedin", url: "https://www.linkedin.com/in/chenzizhao/" },
    Location { label: "the pit", url: "https://skulepedia.ca/wiki/Sandford_Fleming_Atrium" },
];

/// Pick one location uniformly at random.
pub fn pick_location<R: Rng + ?Sized>(rng: &mut R) -> Location {
    LOCATIONS[rng.random_range(0..LOCATIONS.len())]
}
