use crate::club::ClubId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pairing {
    pub home: ClubId,
    pub away: ClubId,
}

impl Pairing {
    pub fn new(home: ClubId, away: ClubId) -> Self {
        Pairing { home, away }
    }

    pub fn reversed(&self) -> Self {
        Pairing::new(self.away, self.home)
    }
}

/// One round of an all-play-all schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleTour {
    /// 1-based and continuous across both halves.
    pub round: u16,
    pub pairings: Vec<Pairing>,
}

pub struct RoundRobin;

impl RoundRobin {
    /// Circle method: the first slot stays put while the others turn one
    /// place per round. An odd field puts a bye in the fixed slot, and
    /// whoever meets it sits that round out.
    ///
    /// The fixed slot's pairing swaps sides every round, the others by
    /// position, so each club is at home for half its games, rounded.
    ///
    /// With `double_round` every round is repeated after the first half
    /// with sides swapped, numbered on from `n` to `2(n - 1)`.
    pub fn generate(clubs: &[ClubId], double_round: bool) -> Vec<ScheduleTour> {
        let mut slots: Vec<Option<ClubId>> = clubs.iter().copied().map(Some).collect();

        if slots.len() % 2 != 0 {
            slots.insert(0, None);
        }

        let slot_count = slots.len();

        if slot_count < 2 {
            return Vec::new();
        }

        let rounds_per_half = slot_count - 1;
        let half = slot_count / 2;

        let mut tours = Vec::with_capacity(if double_round {
            rounds_per_half * 2
        } else {
            rounds_per_half
        });

        for round_idx in 0..rounds_per_half {
            let pairings = (0..half)
                .filter_map(|i| match (slots[i], slots[slot_count - 1 - i]) {
                    (Some(first), Some(second)) => {
                        let swap = if i == 0 { round_idx % 2 == 1 } else { i % 2 == 1 };

                        Some(if swap {
                            Pairing::new(second, first)
                        } else {
                            Pairing::new(first, second)
                        })
                    }
                    _ => None,
                })
                .collect();

            tours.push(ScheduleTour {
                round: round_idx as u16 + 1,
                pairings,
            });

            slots[1..].rotate_right(1);
        }

        if double_round {
            let second_half: Vec<ScheduleTour> = tours
                .iter()
                .map(|tour| ScheduleTour {
                    round: tour.round + rounds_per_half as u16,
                    pairings: tour.pairings.iter().map(Pairing::reversed).collect(),
                })
                .collect();

            tours.extend(second_half);
        }

        tours
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use std::collections::{HashMap, HashSet};

    fn ids(count: u32) -> Vec<ClubId> {
        (1..=count).collect()
    }

    fn unordered(pairing: &Pairing) -> (ClubId, ClubId) {
        (pairing.home.min(pairing.away), pairing.home.max(pairing.away))
    }

    #[test]
    fn test_four_clubs_single_round() {
        let tours = RoundRobin::generate(&ids(4), false);

        assert_eq!(tours.len(), 3);
        assert!(tours.iter().all(|t| t.pairings.len() == 2));

        let total: usize = tours.iter().map(|t| t.pairings.len()).sum();
        assert_eq!(total, 6);

        let mut games: HashMap<ClubId, usize> = HashMap::new();
        for pairing in tours.iter().flat_map(|t| &t.pairings) {
            *games.entry(pairing.home).or_default() += 1;
            *games.entry(pairing.away).or_default() += 1;
        }
        assert!(games.values().all(|count| *count == 3));
    }

    #[test]
    fn test_single_round_meets_every_pair_once() {
        for count in 2..=20 {
            let clubs = ids(count);
            let tours = RoundRobin::generate(&clubs, false);

            let padded = if count % 2 == 0 { count } else { count + 1 };
            assert_eq!(tours.len(), padded as usize - 1);

            let met: Vec<(ClubId, ClubId)> = tours.iter().flat_map(|t| &t.pairings).map(unordered).collect();
            let unique: HashSet<(ClubId, ClubId)> = met.iter().copied().collect();

            let expected: HashSet<(ClubId, ClubId)> = clubs.iter().copied().tuple_combinations().collect();

            assert_eq!(met.len(), expected.len(), "{} clubs", count);
            assert_eq!(unique, expected, "{} clubs", count);
        }
    }

    #[test]
    fn test_club_plays_at_most_once_per_round() {
        for count in [5, 8, 11, 16] {
            for tour in RoundRobin::generate(&ids(count), true) {
                let mut seen = HashSet::new();

                for pairing in &tour.pairings {
                    assert!(seen.insert(pairing.home));
                    assert!(seen.insert(pairing.away));
                }
            }
        }
    }

    #[test]
    fn test_double_round_mirrors_first_half() {
        let clubs = ids(6);
        let tours = RoundRobin::generate(&clubs, true);

        assert_eq!(tours.len(), 10);

        let rounds: Vec<u16> = tours.iter().map(|t| t.round).collect();
        assert_eq!(rounds, (1..=10).collect::<Vec<u16>>());

        for idx in 0..5 {
            let reversed: Vec<Pairing> = tours[idx].pairings.iter().map(Pairing::reversed).collect();
            assert_eq!(tours[idx + 5].pairings, reversed);
        }

        let directed: HashSet<(ClubId, ClubId)> = tours
            .iter()
            .flat_map(|t| &t.pairings)
            .map(|p| (p.home, p.away))
            .collect();

        assert_eq!(directed.len(), 30);
        for (a, b) in clubs.iter().copied().tuple_combinations() {
            assert!(directed.contains(&(a, b)));
            assert!(directed.contains(&(b, a)));
        }
    }

    #[test]
    fn test_odd_field_gives_each_club_one_bye() {
        let tours = RoundRobin::generate(&ids(5), false);

        assert_eq!(tours.len(), 5);
        assert!(tours.iter().all(|t| t.pairings.len() == 2));

        let mut byes: HashMap<ClubId, usize> = HashMap::new();
        for tour in &tours {
            let playing: HashSet<ClubId> = tour.pairings.iter().flat_map(|p| [p.home, p.away]).collect();
            for club in ids(5).into_iter().filter(|c| !playing.contains(c)) {
                *byes.entry(club).or_default() += 1;
            }
        }

        assert_eq!(byes.len(), 5);
        assert!(byes.values().all(|count| *count == 1));
    }

    #[test]
    fn test_home_games_balanced_per_half() {
        for count in 2..=20 {
            let tours = RoundRobin::generate(&ids(count), false);

            let mut home: HashMap<ClubId, u32> = ids(count).into_iter().map(|c| (c, 0)).collect();
            for pairing in tours.iter().flat_map(|t| &t.pairings) {
                *home.entry(pairing.home).or_default() += 1;
            }

            let games = count - 1;
            for (club, home_games) in &home {
                assert!(
                    (games / 2..=games.div_ceil(2)).contains(home_games),
                    "{} clubs: club {} has {} home games",
                    count,
                    club,
                    home_games
                );
            }
        }
    }

    #[test]
    fn test_same_order_same_schedule() {
        let clubs = vec![9, 3, 7, 1, 12, 4];

        assert_eq!(RoundRobin::generate(&clubs, true), RoundRobin::generate(&clubs, true));
    }

    #[test]
    fn test_degenerate_fields() {
        assert!(RoundRobin::generate(&[], true).is_empty());

        // A lone club only ever meets the bye.
        let lone = RoundRobin::generate(&[1], false);
        assert!(lone.iter().all(|t| t.pairings.is_empty()));
    }
}
