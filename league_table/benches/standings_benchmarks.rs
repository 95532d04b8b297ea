use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use league_table::{
    Snapshot, StandingsEngine,
    snapshot::{CardEvent, CardKind, GoalEvent, GoalKind, Group, MatchRecord, MatchStatus, Player, Team, Tournament},
    standings::score,
};
use uuid::Uuid;

/// Helper to build a snapshot with one group playing a full double round-robin
fn setup_round_robin(n_teams: usize) -> (Snapshot, Uuid, Uuid) {
    let tournament_id = Uuid::new_v4();
    let group_id = Uuid::new_v4();

    let teams: Vec<Team> = (0..n_teams)
        .map(|i| Team {
            id: Uuid::new_v4(),
            name: format!("Team {:02}", i),
        })
        .collect();

    // Three players per team
    let players: Vec<Player> = teams
        .iter()
        .flat_map(|team| {
            (0..3).map(move |i| Player {
                id: Uuid::new_v4(),
                name: format!("{} player {}", team.name, i),
                team_id: team.id,
            })
        })
        .collect();

    let mut matches = Vec::new();
    for (h, home) in teams.iter().enumerate() {
        for (a, away) in teams.iter().enumerate() {
            if h == a {
                continue;
            }

            // Deterministic scorelines with plenty of level records
            let home_goals = (h + 2 * a) % 3;
            let away_goals = (a + h) % 2;

            let mut goals = Vec::new();
            for g in 0..home_goals {
                let scorer = &players[h * 3 + g % 3];
                goals.push(GoalEvent::new(home.id, scorer.id, GoalKind::Regular, (g * 10) as u16));
            }
            for g in 0..away_goals {
                let scorer = &players[a * 3 + g % 3];
                goals.push(GoalEvent::new(away.id, scorer.id, GoalKind::Penalty, (g * 10 + 5) as u16));
            }

            let booked = &players[a * 3];
            matches.push(MatchRecord {
                id: Uuid::new_v4(),
                tournament_id,
                group_id: Some(group_id),
                home_team_id: Some(home.id),
                away_team_id: Some(away.id),
                status: MatchStatus::Finished,
                goals,
                cards: vec![CardEvent::new(away.id, booked.id, CardKind::Yellow, 60)],
            });
        }
    }

    let snapshot = Snapshot {
        tournaments: vec![Tournament {
            id: tournament_id,
            name: "Bench Cup".to_string(),
        }],
        groups: vec![Group {
            id: group_id,
            tournament_id,
            name: "Group B".to_string(),
            team_ids: teams.iter().map(|t| t.id).collect(),
        }],
        teams,
        players,
        matches,
    };

    (snapshot, tournament_id, group_id)
}

/// Benchmark deriving a score from a busy match
fn bench_match_score(c: &mut Criterion) {
    let (snapshot, _, _) = setup_round_robin(4);
    let mut record = snapshot.matches[0].clone();
    let (home, away) = record.teams().unwrap();
    for minute in 0..20u16 {
        let team = if minute % 2 == 0 { home } else { away };
        let kind = if minute % 7 == 0 { GoalKind::OwnGoal } else { GoalKind::Regular };
        record.goals.push(GoalEvent::new(team, Uuid::new_v4(), kind, minute));
    }

    c.bench_function("match_score_20_goals", |b| {
        b.iter(|| score::match_score(&record));
    });
}

/// Benchmark group standings for different group sizes
fn bench_group_standings(c: &mut Criterion) {
    let mut group = c.benchmark_group("group_standings");
    let engine = StandingsEngine::default();

    for n_teams in [4, 8, 16].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_teams", n_teams)),
            n_teams,
            |b, &n| {
                let (snapshot, _, group_id) = setup_round_robin(n);
                b.iter(|| engine.compute_group_standings(&snapshot, group_id));
            },
        );
    }

    group.finish();
}

/// Benchmark tournament-wide top scorers
fn bench_tournament_top_scorers(c: &mut Criterion) {
    let engine = StandingsEngine::default();
    let (snapshot, tournament_id, _) = setup_round_robin(16);

    c.bench_function("tournament_top_scorers_16_teams", |b| {
        b.iter(|| engine.compute_tournament_top_scorers(&snapshot, tournament_id, Some(10)));
    });
}

criterion_group!(scoring, bench_match_score);

criterion_group!(
    standings,
    bench_group_standings,
    bench_tournament_top_scorers,
);

criterion_main!(scoring, standings);
