use super::model::Song;

const THANG_DIEN_COVER: &str =
    "https://photo-resize-zmp3.zadn.vn/w320_r1x1_webp/cover/9/d/5/c/9d5c56a277a06a48ec7956a4fd17e4c1.jpg";

fn thang_dien() -> Song {
    Song::new("Thằng điên", ["Justatee", "Phương Ly"], THANG_DIEN_COVER)
}

/// The built-in playlist. The repeated entries are placeholder content and
/// are rendered as independent rows.
pub(super) fn sample_songs() -> Vec<Song> {
    let mut songs = vec![
        thang_dien(),
        Song::new(
            "Em không hiểu",
            ["Changg"],
            "https://i.ytimg.com/vi/RaKifsK2cOc/hqdefault.jpg?s…EIYAXABwAEG&rs=AOn4CLAu9xWYplDeNJwoVJWE3k5XjhXK1A",
        ),
        Song::new(
            "Liệu giờ",
            ["2T", "Venn"],
            "https://i.ytimg.com/vi/ss3NJ7uopjc/hqdefault.jpg?sqp=-oaymwEbCKgBEF5IVfKriqkDDggBFQAAiEIYAXABwAEG&rs=AOn4CLBEcHox2Pos4zxSgoEGvmCJ7PxbJQ",
        ),
    ];
    songs.extend(std::iter::repeat_with(thang_dien).take(9));
    songs
}
