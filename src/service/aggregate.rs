use std::collections::BTreeMap;

use crate::model::{
    matches::TeamId,
    tables::{FrameRow, GoldDiffRow},
};

#[derive(Default)]
struct TeamTotals {
    team100: Option<i64>,
    team200: Option<i64>,
}

/// Sums total gold per (timestamp, team), inner-joins the two teams on
/// timestamp and derives the signed differential plus the two clipped
/// one-sided lead series for the area chart. Output is ordered by timestamp.
pub fn gold_differential(frames: &[FrameRow]) -> Vec<GoldDiffRow> {
    let mut totals: BTreeMap<i64, TeamTotals> = BTreeMap::new();
    for row in frames {
        let entry = totals.entry(row.timestamp).or_default();
        let team = match row.team_id {
            TeamId::Blue => &mut entry.team100,
            TeamId::Red => &mut entry.team200,
        };
        *team = Some(team.unwrap_or(0) + i64::from(row.total_gold));
    }

    totals
        .into_iter()
        .filter_map(|(timestamp, teams)| {
            // Inner join, timestamps covered by only one team are dropped
            let (team100_gold, team200_gold) = match (teams.team100, teams.team200) {
                (Some(blue), Some(red)) => (blue, red),
                _ => return None,
            };

            let gold_diff = team100_gold - team200_gold;
            Some(GoldDiffRow {
                timestamp,
                team100_gold,
                team200_gold,
                gold_diff,
                team100_gold_diff: gold_diff.max(0),
                team200_gold_diff: (-gold_diff).max(0),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::{
        model::{tables::FrameRow, timeline::Timeline},
        service::transform::{
            flatten_frames, flatten_participants,
            tests::{frame, full_match_detail},
        },
    };

    use super::*;

    fn frame_row(timestamp: i64, team_id: TeamId, total_gold: i32) -> FrameRow {
        FrameRow {
            timestamp,
            participant_id: 1.into(),
            x: 0,
            y: 0,
            current_gold: 0,
            total_gold,
            level: 1,
            xp: 0,
            minions_killed: 0,
            jungle_minions_killed: 0,
            team_id,
        }
    }

    #[test]
    fn blue_lead_clips_to_blue_column() {
        let rows = vec![
            frame_row(5, TeamId::Blue, 1_000),
            frame_row(5, TeamId::Red, 700),
        ];

        let diff = gold_differential(&rows);
        assert_eq!(diff.len(), 1);
        assert_eq!(diff[0].timestamp, 5);
        assert_eq!(diff[0].gold_diff, 300);
        assert_eq!(diff[0].team100_gold_diff, 300);
        assert_eq!(diff[0].team200_gold_diff, 0);
    }

    #[test]
    fn red_lead_clips_to_red_column() {
        let rows = vec![
            frame_row(5, TeamId::Blue, 500),
            frame_row(5, TeamId::Red, 800),
        ];

        let diff = gold_differential(&rows);
        assert_eq!(diff[0].gold_diff, -300);
        assert_eq!(diff[0].team100_gold_diff, 0);
        assert_eq!(diff[0].team200_gold_diff, 300);
    }

    #[test]
    fn tie_leaves_both_columns_zero() {
        let rows = vec![
            frame_row(0, TeamId::Blue, 2_500),
            frame_row(0, TeamId::Red, 2_500),
        ];

        let diff = gold_differential(&rows);
        assert_eq!(diff[0].gold_diff, 0);
        assert_eq!(diff[0].team100_gold_diff, 0);
        assert_eq!(diff[0].team200_gold_diff, 0);
    }

    #[test]
    fn gold_sums_over_all_team_members() {
        let rows = vec![
            frame_row(3, TeamId::Blue, 1_000),
            frame_row(3, TeamId::Blue, 1_200),
            frame_row(3, TeamId::Red, 900),
        ];

        let diff = gold_differential(&rows);
        assert_eq!(diff[0].team100_gold, 2_200);
        assert_eq!(diff[0].team200_gold, 900);
    }

    #[test]
    fn one_sided_timestamps_are_dropped() {
        let rows = vec![
            frame_row(1, TeamId::Blue, 1_000),
            frame_row(1, TeamId::Red, 900),
            frame_row(2, TeamId::Blue, 1_500),
        ];

        let diff = gold_differential(&rows);
        assert_eq!(diff.len(), 1);
        assert_eq!(diff[0].timestamp, 1);
    }

    #[test]
    fn three_frames_produce_three_minute_rows() {
        let detail = full_match_detail();
        let timeline = Timeline {
            frames: vec![
                frame(0, 500, 500),
                frame(60_000, 1_500, 1_300),
                frame(120_000, 2_500, 2_900),
            ],
        };

        let participants = flatten_participants(&detail).unwrap();
        let frame_rows = flatten_frames(&timeline, &participants).unwrap();
        let diff = gold_differential(&frame_rows);

        let timestamps: Vec<_> = diff.iter().map(|r| r.timestamp).collect();
        assert_eq!(timestamps, vec![0, 1, 2]);
        // 5 players per team at 2500 vs 2900 each in the last frame
        assert_eq!(diff[2].gold_diff, -2_000);
        assert_eq!(diff[2].team200_gold_diff, 2_000);
    }

    #[test]
    fn aggregation_is_deterministic() {
        let detail = full_match_detail();
        let timeline = Timeline {
            frames: vec![frame(0, 500, 500), frame(60_000, 1_500, 1_300)],
        };
        let participants = flatten_participants(&detail).unwrap();
        let frame_rows = flatten_frames(&timeline, &participants).unwrap();

        assert_eq!(gold_differential(&frame_rows), gold_differential(&frame_rows));
    }
}
