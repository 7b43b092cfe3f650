mod tests {
    use crate::{
        errors::GenerationError,
        generation::partitioner::{create_teams, partition},
        shapes::{
            enums::PositionEnum, player::PlayerEntry, roster::RosterEntry,
            teams::GeneratedTeams,
        },
        tests::fixtures::{active, full_roster, player},
    };
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use std::collections::HashSet;

    fn goalkeepers(team: &[PlayerEntry]) -> usize {
        team.iter().filter(|p| p.is_goalkeeper()).count()
    }

    fn count_position(team: &[PlayerEntry], position: PositionEnum) -> usize {
        team.iter().filter(|p| p.position == position).count()
    }

    fn assert_valid_teams(teams: &GeneratedTeams) {
        assert_eq!(teams.team_a.len(), teams.team_b.len());
        assert_eq!(goalkeepers(&teams.team_a), 1);
        assert_eq!(goalkeepers(&teams.team_b), 1);
        assert!(teams
            .team_a
            .iter()
            .chain(teams.team_b.iter())
            .all(|p| p.is_playing));
        let ids: HashSet<_> = teams
            .team_a
            .iter()
            .chain(teams.team_b.iter())
            .map(|p| p.id)
            .collect();
        assert_eq!(ids.len(), teams.team_a.len() + teams.team_b.len());
    }

    fn random_roster(rng: &mut StdRng) -> RosterEntry {
        let size = rng.gen_range(0..20);
        let players = (0..size)
            .map(|i| {
                player(
                    &format!("player{}", i),
                    PositionEnum::ALL[rng.gen_range(0..PositionEnum::ALL.len())],
                    rng.gen_range(1..=3),
                    rng.gen_bool(0.8),
                )
            })
            .collect();
        RosterEntry::new(players)
    }

    #[test]
    fn fewer_than_four_active_players_is_rejected() {
        let roster = RosterEntry::new(vec![
            active("gk1", PositionEnum::Goalkeeper, 2),
            active("gk2", PositionEnum::Goalkeeper, 2),
            active("def1", PositionEnum::Defender, 2),
            player("def2", PositionEnum::Defender, 2, false),
            player("mid1", PositionEnum::Midfielder, 2, false),
        ]);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            create_teams(&roster, &mut rng),
            Err(GenerationError::InsufficientActivePlayers)
        );
    }

    #[test]
    fn empty_roster_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            create_teams(&RosterEntry::default(), &mut rng),
            Err(GenerationError::InsufficientActivePlayers)
        );
    }

    #[test]
    fn single_goalkeeper_is_rejected() {
        let roster = RosterEntry::new(vec![
            active("gk1", PositionEnum::Goalkeeper, 2),
            active("def1", PositionEnum::Defender, 2),
            active("def2", PositionEnum::Defender, 1),
            active("mid1", PositionEnum::Midfielder, 3),
            active("mid2", PositionEnum::Midfielder, 2),
            active("fwd1", PositionEnum::Forward, 1),
            active("fwd2", PositionEnum::Forward, 3),
        ]);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            create_teams(&roster, &mut rng),
            Err(GenerationError::InsufficientGoalkeepers)
        );
    }

    #[test]
    fn goalkeeper_not_playing_does_not_count() {
        let roster = RosterEntry::new(vec![
            active("gk1", PositionEnum::Goalkeeper, 2),
            player("gk2", PositionEnum::Goalkeeper, 2, false),
            active("def1", PositionEnum::Defender, 2),
            active("def2", PositionEnum::Defender, 1),
            active("mid1", PositionEnum::Midfielder, 3),
        ]);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            create_teams(&roster, &mut rng),
            Err(GenerationError::InsufficientGoalkeepers)
        );
    }

    #[test]
    fn one_player_per_position_on_each_side() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let teams = create_teams(&full_roster(), &mut rng).expect("expected two teams");
            assert_valid_teams(&teams);
            assert_eq!(teams.team_a.len(), 4);
            for team in [&teams.team_a, &teams.team_b] {
                for position in PositionEnum::ALL {
                    assert_eq!(count_position(team, position), 1);
                }
            }
        }
    }

    #[test]
    fn goalkeepers_anchor_in_roster_order() {
        let roster = full_roster();
        let mut rng = StdRng::seed_from_u64(3);
        let teams = create_teams(&roster, &mut rng).expect("expected two teams");
        assert_eq!(teams.team_a[0].name, "gk1");
        assert_eq!(teams.team_b[0].name, "gk2");
    }

    #[test]
    fn third_goalkeeper_sits_out() {
        let roster = RosterEntry::new(vec![
            player("gk0", PositionEnum::Goalkeeper, 3, false),
            active("gk1", PositionEnum::Goalkeeper, 2),
            active("def1", PositionEnum::Defender, 2),
            active("gk2", PositionEnum::Goalkeeper, 1),
            active("def2", PositionEnum::Defender, 1),
            active("gk3", PositionEnum::Goalkeeper, 3),
            active("mid1", PositionEnum::Midfielder, 3),
            active("mid2", PositionEnum::Midfielder, 2),
            active("fwd1", PositionEnum::Forward, 1),
            active("fwd2", PositionEnum::Forward, 3),
        ]);
        let mut rng = StdRng::seed_from_u64(11);
        let teams = create_teams(&roster, &mut rng).expect("expected two teams");
        assert_valid_teams(&teams);
        assert_eq!(teams.team_a.len(), 4);
        assert_eq!(teams.team_a[0].name, "gk1");
        assert_eq!(teams.team_b[0].name, "gk2");
        assert!(teams
            .team_a
            .iter()
            .chain(teams.team_b.iter())
            .all(|p| p.name != "gk3" && p.name != "gk0"));
    }

    #[test]
    fn third_goalkeeper_with_odd_outfield_count_is_unbalanced() {
        let roster = RosterEntry::new(vec![
            active("gk1", PositionEnum::Goalkeeper, 2),
            active("gk2", PositionEnum::Goalkeeper, 1),
            active("gk3", PositionEnum::Goalkeeper, 3),
            active("def1", PositionEnum::Defender, 2),
            active("def2", PositionEnum::Defender, 1),
            active("mid1", PositionEnum::Midfielder, 3),
            active("fwd1", PositionEnum::Forward, 1),
            active("fwd2", PositionEnum::Forward, 3),
        ]);
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(
            create_teams(&roster, &mut rng),
            Err(GenerationError::UnbalancedTeams)
        );
    }

    #[test]
    fn odd_outfield_count_is_unbalanced() {
        let players = vec![
            active("gk1", PositionEnum::Goalkeeper, 2),
            active("gk2", PositionEnum::Goalkeeper, 1),
            active("def1", PositionEnum::Defender, 2),
            active("mid1", PositionEnum::Midfielder, 3),
            active("fwd1", PositionEnum::Forward, 1),
        ];
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(
            partition(&players, &mut rng),
            Err(GenerationError::UnbalancedTeams)
        );
    }

    #[test]
    fn only_goalkeepers_gives_one_a_side() {
        let players = vec![
            active("gk1", PositionEnum::Goalkeeper, 2),
            active("gk2", PositionEnum::Goalkeeper, 1),
            active("gk3", PositionEnum::Goalkeeper, 3),
            active("gk4", PositionEnum::Goalkeeper, 3),
        ];
        let mut rng = StdRng::seed_from_u64(5);
        let teams = partition(&players, &mut rng).expect("expected two teams");
        assert_eq!(teams.team_a.len(), 1);
        assert_eq!(teams.team_b.len(), 1);
    }

    #[test]
    fn strongest_players_are_dealt_first_within_a_position() {
        let roster = RosterEntry::new(vec![
            active("gk1", PositionEnum::Goalkeeper, 2),
            active("gk2", PositionEnum::Goalkeeper, 2),
            active("weak1", PositionEnum::Defender, 1),
            active("strong1", PositionEnum::Defender, 3),
            active("weak2", PositionEnum::Defender, 1),
            active("strong2", PositionEnum::Defender, 3),
        ]);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let teams = create_teams(&roster, &mut rng).expect("expected two teams");
            assert_eq!(teams.team_a[1].skill, 3);
            assert_eq!(teams.team_b[1].skill, 3);
            assert_eq!(teams.team_a[2].skill, 1);
            assert_eq!(teams.team_b[2].skill, 1);
            assert_eq!(teams.total_skill(crate::shapes::enums::TeamSideEnum::A), 6);
        }
    }

    #[test]
    fn defenders_are_dealt_before_forwards() {
        let roster = RosterEntry::new(vec![
            active("gk1", PositionEnum::Goalkeeper, 2),
            active("gk2", PositionEnum::Goalkeeper, 2),
            active("fwd1", PositionEnum::Forward, 3),
            active("fwd2", PositionEnum::Forward, 3),
            active("def1", PositionEnum::Defender, 1),
            active("def2", PositionEnum::Defender, 1),
        ]);
        let mut rng = StdRng::seed_from_u64(9);
        let teams = create_teams(&roster, &mut rng).expect("expected two teams");
        assert_eq!(teams.team_a[1].position, PositionEnum::Defender);
        assert_eq!(teams.team_b[1].position, PositionEnum::Defender);
        assert_eq!(teams.team_a[2].position, PositionEnum::Forward);
        assert_eq!(teams.team_b[2].position, PositionEnum::Forward);
    }

    #[test]
    fn same_seed_same_teams() {
        let roster = full_roster();
        let first = create_teams(&roster, &mut StdRng::seed_from_u64(42));
        let second = create_teams(&roster, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn equal_players_land_on_either_side_evenly() {
        let roster = RosterEntry::new(vec![
            active("gk1", PositionEnum::Goalkeeper, 2),
            active("gk2", PositionEnum::Goalkeeper, 2),
            active("first", PositionEnum::Midfielder, 2),
            active("second", PositionEnum::Midfielder, 2),
        ]);
        let runs = 2000;
        let first_in_a = (0..runs)
            .filter(|seed| {
                let mut rng = StdRng::seed_from_u64(*seed);
                let teams = create_teams(&roster, &mut rng).expect("expected two teams");
                teams.team_a[1].name == "first"
            })
            .count();
        assert!(
            (800..=1200).contains(&first_in_a),
            "first player went to team A {} times out of {}",
            first_in_a,
            runs
        );
    }

    #[test]
    fn random_rosters_respect_team_invariants() {
        let mut roster_rng = StdRng::seed_from_u64(2024);
        for seed in 0..500 {
            let roster = random_roster(&mut roster_rng);
            let active_count = roster.players.iter().filter(|p| p.is_playing).count();
            let active_goalkeepers = roster
                .players
                .iter()
                .filter(|p| p.is_playing && p.is_goalkeeper())
                .count();
            let mut rng = StdRng::seed_from_u64(seed);
            match create_teams(&roster, &mut rng) {
                Ok(teams) => {
                    assert_valid_teams(&teams);
                    let ids: HashSet<_> = roster.players.iter().map(|p| p.id).collect();
                    assert!(teams
                        .team_a
                        .iter()
                        .chain(teams.team_b.iter())
                        .all(|p| ids.contains(&p.id)));
                }
                Err(GenerationError::InsufficientActivePlayers) => assert!(active_count < 4),
                Err(GenerationError::InsufficientGoalkeepers) => {
                    assert!(active_count >= 4);
                    assert!(active_goalkeepers < 2);
                }
                Err(GenerationError::UnbalancedTeams) => {
                    assert!(active_count >= 4);
                    assert!(active_goalkeepers >= 2);
                }
            }
        }
    }
}
