use spiritcli::spotify::history::resolve_plays;
use spiritcli::types::{Artist, PlayHistoryItem, PlayedTrack, TrackArtist};

// Helper function to create a history entry with a single artist
fn create_item(track: &str, artist_id: &str, artist_name: &str) -> PlayHistoryItem {
    PlayHistoryItem {
        track: PlayedTrack {
            id: format!("{}_track_id", track),
            name: track.to_string(),
            artists: vec![TrackArtist {
                id: artist_id.to_string(),
                name: artist_name.to_string(),
            }],
        },
        played_at: "2024-05-01T12:00:00Z".to_string(),
    }
}

// Helper function to create an artist record with genres
fn create_artist(id: &str, name: &str, genres: &[&str]) -> Artist {
    Artist {
        id: id.to_string(),
        name: name.to_string(),
        genres: genres.iter().map(|g| g.to_string()).collect(),
    }
}

#[test]
fn test_resolve_plays_attaches_primary_artist_genres() {
    let items = vec![
        create_item("Let It Be", "beatles_id", "The Beatles"),
        create_item("Karma Police", "radiohead_id", "Radiohead"),
    ];
    let artists = vec![
        create_artist("beatles_id", "The Beatles", &["rock", "classic rock"]),
        create_artist("radiohead_id", "Radiohead", &["art rock"]),
    ];

    let plays = resolve_plays(&items, &artists);

    assert_eq!(plays.len(), 2);
    assert_eq!(plays[0].track_name, "Let It Be");
    assert_eq!(plays[0].artist_name, "The Beatles");
    assert_eq!(plays[0].genres, vec!["rock", "classic rock"]);
    assert_eq!(plays[1].genres, vec!["art rock"]);
}

#[test]
fn test_resolve_plays_preserves_input_order() {
    let items = vec![
        create_item("Third", "c", "C"),
        create_item("First", "a", "A"),
        create_item("Second", "b", "B"),
    ];
    let artists = vec![
        create_artist("a", "A", &[]),
        create_artist("b", "B", &[]),
        create_artist("c", "C", &[]),
    ];

    let plays = resolve_plays(&items, &artists);

    let tracks: Vec<&str> = plays.iter().map(|p| p.track_name.as_str()).collect();
    assert_eq!(tracks, vec!["Third", "First", "Second"]);
}

#[test]
fn test_resolve_plays_missing_artist_means_no_genres() {
    let items = vec![create_item("Obscure Song", "unknown_id", "Unknown Artist")];

    // Artist lookup came back empty
    let plays = resolve_plays(&items, &[]);

    assert_eq!(plays.len(), 1);
    assert_eq!(plays[0].artist_name, "Unknown Artist");
    assert!(plays[0].genres.is_empty());
}

#[test]
fn test_resolve_plays_track_without_artists() {
    let items = vec![PlayHistoryItem {
        track: PlayedTrack {
            id: "orphan_track_id".to_string(),
            name: "Orphan Track".to_string(),
            artists: Vec::new(),
        },
        played_at: "2024-05-01T12:00:00Z".to_string(),
    }];

    let plays = resolve_plays(&items, &[]);

    assert_eq!(plays.len(), 1);
    assert_eq!(plays[0].track_name, "Orphan Track");
    assert!(plays[0].artist_name.is_empty());
    assert!(plays[0].genres.is_empty());
}
