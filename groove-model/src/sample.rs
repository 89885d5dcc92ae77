//! Built-in collection used when no CMS export is supplied.

use crate::album::{Album, AlbumKind, ProjectItem};

const INK_CHARCOAL: &str = "#1A1A1A";
const KLEIN_BLUE: &str = "#002FA7";
const FILM_ORANGE: &str = "#F05A28";
const DEVELOPING_CYAN: &str = "#00C2CB";

fn item(
    id: &str,
    title: &str,
    date: &str,
    description: &str,
    tags: &[&str],
) -> ProjectItem {
    ProjectItem {
        id: id.to_string(),
        title: title.to_string(),
        date: date.to_string(),
        description: description.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        link: None,
        image_url: None,
    }
}

fn album(
    kind: AlbumKind,
    title: &str,
    subtitle: &str,
    color: &str,
    tracks: Vec<ProjectItem>,
) -> Album {
    Album {
        kind,
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        color: color.to_string(),
        // Solid-color cover; renderers paint the accent directly.
        cover_image: format!("solid:{color}"),
        tracks,
    }
}

pub(crate) fn albums() -> Vec<Album> {
    vec![
        album(
            AlbumKind::Writing,
            "Think Piece_01",
            "Essays & Articles",
            INK_CHARCOAL,
            vec![
                item(
                    "w1",
                    "The Philosophy of Less",
                    "2023.11",
                    "Minimalism in digital interface design.",
                    &["Design", "Philosophy"],
                ),
                item(
                    "w2",
                    "Systemic Thinking",
                    "2023.09",
                    "Breaking complex problems into atomic components.",
                    &["Systems", "Logic"],
                ),
                item(
                    "w3",
                    "Digital Garden",
                    "2023.05",
                    "Gardening notes instead of blogging.",
                    &["Personal", "Growth"],
                ),
            ],
        ),
        album(
            AlbumKind::Coding,
            "Vibe.Code",
            "Development Projects",
            KLEIN_BLUE,
            vec![
                item(
                    "c1",
                    "Chat Interface",
                    "2024.02",
                    "A multimodal chat client.",
                    &["UI", "AI"],
                ),
                item(
                    "c2",
                    "Audio Visualizer",
                    "2024.01",
                    "Real-time rendering of audio frequency data.",
                    &["Canvas", "Audio"],
                ),
                item(
                    "c3",
                    "Flow State Timer",
                    "2023.12",
                    "A deep-work timer with ambient sound.",
                    &["Productivity", "Tool"],
                ),
            ],
        ),
        album(
            AlbumKind::Video,
            "Cinematics",
            "Motion & Film",
            FILM_ORANGE,
            vec![
                item(
                    "v1",
                    "City Rhythm",
                    "2023.10",
                    "A short film of a city at night.",
                    &["Direction", "Editing"],
                ),
                item(
                    "v2",
                    "Product Launch",
                    "2023.08",
                    "Commercial spot for a furniture brand.",
                    &["Commercial", "Color Grade"],
                ),
            ],
        ),
        album(
            AlbumKind::Photo,
            "Exposures",
            "Photography Gallery",
            DEVELOPING_CYAN,
            vec![
                item(
                    "p1",
                    "Architecture Study",
                    "2023.07",
                    "Brutalist structures.",
                    &["B&W", "Architecture"],
                ),
                item(
                    "p2",
                    "Portraits in Rain",
                    "2023.04",
                    "Light and texture during monsoon season.",
                    &["Portrait", "Nature"],
                ),
                item(
                    "p3",
                    "Abstract Macros",
                    "2023.02",
                    "Everyday objects up close.",
                    &["Macro", "Abstract"],
                ),
            ],
        ),
    ]
}
