//! Unit tests for tournament aggregation

use super::*;
use serde_json::json;

fn matches(value: serde_json::Value) -> Vec<Match> {
    serde_json::from_value(value).unwrap()
}

/// Two matches: X bowls 3/20 then 3/15; Y only ever bowls.
fn two_match_tournament() -> Vec<Match> {
    matches(json!([
        {
            "teams": ["Lions", "Tigers"],
            "winner": "Lions",
            "detailed_scorecard": {
                "innings1": {
                    "batting_team": "Lions",
                    "batting_stats": [
                        {"name": "X", "runs": 34, "balls": 20, "fours": 3, "sixes": 2},
                        {"name": "Z", "runs": 51, "balls": 30, "fours": 6, "sixes": 1}
                    ],
                    "bowling_stats": [
                        {"name": "Y", "wickets": 2, "runs": 28}
                    ]
                },
                "innings2": {
                    "batting_team": "Tigers",
                    "batting_stats": [
                        {"name": "W", "runs": 12, "balls": 15}
                    ],
                    "bowling_stats": [
                        {"name": "X", "wickets": 3, "runs": 20}
                    ]
                }
            }
        },
        {
            "teams": ["Lions", "Hawks"],
            "winner": "Hawks",
            "detailed_scorecard": {
                "innings1": {
                    "batting_stats": [
                        {"name": "X", "runs": "60", "fours": 5, "sixes": 4}
                    ],
                    "bowling_stats": [
                        {"name": "Y", "wickets": 1, "runs": 10},
                        {"name": "X", "wickets": 3, "runs": 15}
                    ]
                }
            }
        }
    ]))
}

fn names(board: &[&TournamentLeaderboardEntry]) -> Vec<String> {
    board.iter().map(|e| e.name.clone()).collect()
}

#[cfg(test)]
mod aggregation_tests {
    use super::*;

    #[test]
    fn test_batting_totals_accumulate() {
        let aggregate = aggregate_tournament(&two_match_tournament());
        let x = aggregate.get("X").unwrap();

        assert_eq!(x.runs, 94.0);
        assert_eq!(x.innings, 2);
        assert_eq!(x.fours, 8.0);
        assert_eq!(x.sixes, 6.0);
        assert_eq!(x.highest_score, 60.0);
    }

    #[test]
    fn test_bowling_totals_accumulate() {
        let aggregate = aggregate_tournament(&two_match_tournament());
        let x = aggregate.get("X").unwrap();
        let y = aggregate.get("Y").unwrap();

        assert_eq!(x.wickets, 6.0);
        assert_eq!(x.bowling_innings, 2);
        assert_eq!(y.wickets, 3.0);
        assert_eq!(y.innings, 0);
    }

    #[test]
    fn test_best_bowling_prefers_fewer_runs_on_equal_wickets() {
        let aggregate = aggregate_tournament(&two_match_tournament());
        let best = aggregate.get("X").unwrap().best_bowling.unwrap();

        assert_eq!(best, BowlingFigures { wickets: 3.0, runs: 15.0 });
        assert_eq!(best.to_string(), "3/15");
    }

    #[test]
    fn test_best_bowling_prefers_more_wickets() {
        let aggregate = aggregate_tournament(&two_match_tournament());
        let best = aggregate.get("Y").unwrap().best_bowling.unwrap();
        assert_eq!(best, BowlingFigures { wickets: 2.0, runs: 28.0 });
    }

    #[test]
    fn test_batters_have_no_best_bowling() {
        let aggregate = aggregate_tournament(&two_match_tournament());
        assert!(aggregate.get("Z").unwrap().best_bowling.is_none());
    }

    #[test]
    fn test_entries_in_first_appearance_order() {
        let aggregate = aggregate_tournament(&two_match_tournament());
        let order: Vec<&str> = aggregate.iter().map(|e| e.name.as_str()).collect();

        assert_eq!(order, vec!["X", "Z", "Y", "W"]);
        assert_eq!(aggregate.len(), 4);
    }

    #[test]
    fn test_matches_without_scorecard_are_skipped() {
        let games = matches(json!([
            {"teams": ["A", "B"], "winner": "A"},
            {"teams": ["A", "C"], "detailed_scorecard": {"innings1": null}}
        ]));

        let aggregate = aggregate_tournament(&games);
        assert!(aggregate.is_empty());
    }

    #[test]
    fn test_empty_tournament() {
        let aggregate = aggregate_tournament(&[]);
        assert!(aggregate.is_empty());
        assert!(aggregate.leaderboard(LeaderboardCategory::Runs, 20).is_empty());
    }
}

#[cfg(test)]
mod leaderboard_tests {
    use super::*;

    #[test]
    fn test_runs_board_excludes_bowl_only_players() {
        let aggregate = aggregate_tournament(&two_match_tournament());
        let board = aggregate.leaderboard(LeaderboardCategory::Runs, DEFAULT_LEADERBOARD_SIZE);

        assert_eq!(names(&board), vec!["X", "Z", "W"]);
        assert!(board.iter().all(|e| e.name != "Y"));
    }

    #[test]
    fn test_wickets_board_excludes_non_bowlers() {
        let aggregate = aggregate_tournament(&two_match_tournament());
        let board = aggregate.leaderboard(LeaderboardCategory::Wickets, DEFAULT_LEADERBOARD_SIZE);

        assert_eq!(names(&board), vec!["X", "Y"]);
    }

    #[test]
    fn test_best_bowling_board_order() {
        let games = matches(json!([{
            "detailed_scorecard": {
                "innings1": {
                    "bowling_stats": [
                        {"name": "Cheap", "wickets": 2, "runs": 8},
                        {"name": "Pricey", "wickets": 2, "runs": 30},
                        {"name": "Haul", "wickets": 4, "runs": 40},
                        {"name": "Wicketless", "wickets": 0, "runs": 5}
                    ]
                }
            }
        }]));

        let aggregate = aggregate_tournament(&games);
        let board = aggregate.leaderboard(LeaderboardCategory::BestBowling, 20);

        assert_eq!(names(&board), vec!["Haul", "Cheap", "Pricey"]);
    }

    #[test]
    fn test_highest_score_and_boundaries() {
        let aggregate = aggregate_tournament(&two_match_tournament());

        let high = aggregate.leaderboard(LeaderboardCategory::HighestScore, 20);
        assert_eq!(names(&high), vec!["X", "Z", "W"]);

        // W hit no boundaries.
        let sixes = aggregate.leaderboard(LeaderboardCategory::Sixes, 20);
        assert_eq!(names(&sixes), vec!["X", "Z"]);
        let fours = aggregate.leaderboard(LeaderboardCategory::Fours, 20);
        assert_eq!(names(&fours), vec!["X", "Z"]);
    }

    #[test]
    fn test_limit_truncates_after_sorting() {
        let aggregate = aggregate_tournament(&two_match_tournament());
        let board = aggregate.leaderboard(LeaderboardCategory::Runs, 1);

        assert_eq!(names(&board), vec!["X"]);
        assert!(aggregate.leaderboard(LeaderboardCategory::Runs, 0).is_empty());
    }

    #[test]
    fn test_equal_metrics_keep_appearance_order() {
        let games = matches(json!([{
            "detailed_scorecard": {
                "innings1": {
                    "batting_stats": [
                        {"name": "Early", "runs": 25},
                        {"name": "Late", "runs": 25}
                    ]
                }
            }
        }]));

        let aggregate = aggregate_tournament(&games);
        let board = aggregate.leaderboard(LeaderboardCategory::Runs, 20);
        assert_eq!(names(&board), vec!["Early", "Late"]);
    }

    #[test]
    fn test_metric_by_category() {
        let aggregate = aggregate_tournament(&two_match_tournament());
        let x = aggregate.get("X").unwrap();

        assert_eq!(x.metric(LeaderboardCategory::BestBowling), 3.0);
        assert!(x.qualifies(LeaderboardCategory::Wickets));
        assert!(!aggregate
            .get("Y")
            .unwrap()
            .qualifies(LeaderboardCategory::HighestScore));
    }
}
