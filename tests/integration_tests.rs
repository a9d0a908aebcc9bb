use chess_leaderboard::{CliConfig, LeaderboardPipeline, LocalStorage, SyncEngine};
use httpmock::prelude::*;
use tempfile::TempDir;

fn test_config(api_base: String, output_path: String, players: &[&str]) -> CliConfig {
    CliConfig {
        players: players.iter().map(|p| p.to_string()).collect(),
        api_base,
        output_path,
        time_class: "daily".to_string(),
        win_points: 3.0,
        draw_points: 1.0,
        contact: None,
        timeout_seconds: 5,
        verbose: false,
        monitor: false,
        json_logs: false,
    }
}

fn daily_game(
    white: &str,
    white_result: &str,
    black: &str,
    black_result: &str,
    end_time: i64,
) -> serde_json::Value {
    serde_json::json!({
        "white": {"username": white, "result": white_result},
        "black": {"username": black, "result": black_result},
        "time_class": "daily",
        "end_time": end_time,
        "url": format!("https://www.chess.com/game/daily/{}", end_time)
    })
}

fn mock_archives(server: &MockServer, player: &str, archive_paths: &[&str]) {
    let archives: Vec<String> = archive_paths.iter().map(|p| server.url(*p)).collect();
    server.mock(|when, then| {
        when.method(GET)
            .path(format!("/player/{}/games/archives", player));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({ "archives": archives }));
    });
}

fn mock_archive_games(server: &MockServer, path: &str, games: Vec<serde_json::Value>) {
    server.mock(|when, then| {
        when.method(GET).path(path.to_string());
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({ "games": games }));
    });
}

async fn run_sync(
    server: &MockServer,
    output_path: &str,
    players: &[&str],
) -> chess_leaderboard::Result<chess_leaderboard::core::SyncReport> {
    let config = test_config(server.url(""), output_path.to_string(), players);
    let storage = LocalStorage::new(output_path.to_string());
    let pipeline = LeaderboardPipeline::new(storage, config);
    SyncEngine::new(pipeline).run().await
}

#[tokio::test]
async fn end_to_end_sync_writes_both_artifacts() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();

    // alice 勝 bob 一場 daily;另外兩場(rapid、名單外對手)要被濾掉
    let tracked = daily_game("alice", "win", "bob", "checkmated", 1_700_000_000);
    let rapid = serde_json::json!({
        "white": {"username": "alice", "result": "win"},
        "black": {"username": "bob", "result": "checkmated"},
        "time_class": "rapid",
        "end_time": 1_700_000_100,
        "url": "https://www.chess.com/game/live/1"
    });
    let outsider = daily_game("alice", "win", "stranger", "resigned", 1_700_000_200);

    mock_archives(&server, "alice", &["/archive/alice/2023/11"]);
    mock_archive_games(
        &server,
        "/archive/alice/2023/11",
        vec![tracked.clone(), rapid, outsider],
    );
    mock_archives(&server, "bob", &["/archive/bob/2023/11"]);
    mock_archive_games(&server, "/archive/bob/2023/11", vec![tracked]);

    let report = run_sync(&server, &output_path, &["alice", "bob"])
        .await
        .unwrap();

    // 一局對局,雙方視角各一列
    assert_eq!(report.games, 2);
    assert_eq!(report.players_ranked, 2);
    assert_eq!(
        report.changed_files,
        vec!["leaderboard.csv".to_string(), "game_list.csv".to_string()]
    );

    let leaderboard =
        std::fs::read_to_string(temp_dir.path().join("leaderboard.csv")).unwrap();
    let lines: Vec<&str> = leaderboard.lines().collect();
    assert_eq!(lines[0], "Player,Games,Wins,Draws,Losses,Points");
    assert_eq!(lines[1], "alice,1,1,0,0,3");
    assert_eq!(lines[2], "bob,1,0,0,1,0");

    let game_list = std::fs::read_to_string(temp_dir.path().join("game_list.csv")).unwrap();
    let lines: Vec<&str> = game_list.lines().collect();
    assert_eq!(lines[0], "Date,Player,Opponent,Outcome,Game URL");
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("2023-11-14,"));
}

#[tokio::test]
async fn rerun_with_unchanged_data_is_a_no_op() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let game = daily_game("alice", "win", "bob", "resigned", 1_700_000_000);
    mock_archives(&server, "alice", &["/archive/alice/2023/11"]);
    mock_archive_games(&server, "/archive/alice/2023/11", vec![game.clone()]);
    mock_archives(&server, "bob", &["/archive/bob/2023/11"]);
    mock_archive_games(&server, "/archive/bob/2023/11", vec![game]);

    let first = run_sync(&server, &output_path, &["alice", "bob"])
        .await
        .unwrap();
    assert_eq!(first.changed_files.len(), 2);

    let leaderboard_before = std::fs::read(temp_dir.path().join("leaderboard.csv")).unwrap();
    let game_list_before = std::fs::read(temp_dir.path().join("game_list.csv")).unwrap();

    let second = run_sync(&server, &output_path, &["alice", "bob"])
        .await
        .unwrap();
    assert!(second.changed_files.is_empty());

    // byte-identical 產出
    let leaderboard_after = std::fs::read(temp_dir.path().join("leaderboard.csv")).unwrap();
    let game_list_after = std::fs::read(temp_dir.path().join("game_list.csv")).unwrap();
    assert_eq!(leaderboard_before, leaderboard_after);
    assert_eq!(game_list_before, game_list_after);
}

#[tokio::test]
async fn new_game_regenerates_both_artifacts() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    // 第一輪:一場對局
    let first_server = MockServer::start();
    let game_one = daily_game("alice", "win", "bob", "resigned", 1_700_000_000);
    mock_archives(&first_server, "alice", &["/archive/alice/2023/11"]);
    mock_archive_games(
        &first_server,
        "/archive/alice/2023/11",
        vec![game_one.clone()],
    );
    mock_archives(&first_server, "bob", &["/archive/bob/2023/11"]);
    mock_archive_games(&first_server, "/archive/bob/2023/11", vec![game_one.clone()]);

    run_sync(&first_server, &output_path, &["alice", "bob"])
        .await
        .unwrap();

    // 第二輪:多了一場和局
    let second_server = MockServer::start();
    let game_two = daily_game("bob", "stalemate", "alice", "stalemate", 1_700_100_000);
    mock_archives(&second_server, "alice", &["/archive/alice/2023/11"]);
    mock_archive_games(
        &second_server,
        "/archive/alice/2023/11",
        vec![game_one.clone(), game_two.clone()],
    );
    mock_archives(&second_server, "bob", &["/archive/bob/2023/11"]);
    mock_archive_games(
        &second_server,
        "/archive/bob/2023/11",
        vec![game_one, game_two],
    );

    let report = run_sync(&second_server, &output_path, &["alice", "bob"])
        .await
        .unwrap();

    assert_eq!(report.games, 4);
    assert_eq!(
        report.changed_files,
        vec!["leaderboard.csv".to_string(), "game_list.csv".to_string()]
    );

    let leaderboard =
        std::fs::read_to_string(temp_dir.path().join("leaderboard.csv")).unwrap();
    // alice: 1 勝 1 和 = 4 分;bob: 1 負 1 和 = 1 分
    assert!(leaderboard.contains("alice,2,1,1,0,4"));
    assert!(leaderboard.contains("bob,2,0,1,1,1"));
}
