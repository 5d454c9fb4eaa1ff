//! The predefined sample catalog used to seed a fresh playlist.
//!
//! Each entry carries the same fields a caller passes to the engine's add
//! operation plus an optional pre-assigned rating. The bulk loader in the
//! engine crate feeds these through the regular add-then-rate path.

use crate::types::{NewSong, UNRATED};
use serde::Serialize;

/// One predefined song: add-song fields plus a rating (0 = unrated).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub title: &'static str,
    pub artist: &'static str,
    pub album: &'static str,
    pub genre: &'static str,
    pub subgenre: &'static str,
    pub mood: &'static str,
    pub duration: u32,
    pub bpm: u32,
    pub rating: u8,
}

impl CatalogEntry {
    /// The add-song fields of this entry
    pub fn to_new_song(&self) -> NewSong {
        NewSong {
            title: self.title.to_string(),
            artist: self.artist.to_string(),
            album: self.album.to_string(),
            genre: self.genre.to_string(),
            subgenre: self.subgenre.to_string(),
            mood: self.mood.to_string(),
            duration: self.duration,
            bpm: self.bpm,
        }
    }

    pub fn is_prerated(&self) -> bool {
        self.rating != UNRATED
    }
}

#[allow(clippy::too_many_arguments)]
const fn entry(
    title: &'static str,
    artist: &'static str,
    album: &'static str,
    genre: &'static str,
    subgenre: &'static str,
    mood: &'static str,
    duration: u32,
    bpm: u32,
    rating: u8,
) -> CatalogEntry {
    CatalogEntry {
        title,
        artist,
        album,
        genre,
        subgenre,
        mood,
        duration,
        bpm,
        rating,
    }
}

/// Returns the full sample catalog (80 songs across 8 genres).
pub fn sample_catalog() -> &'static [CatalogEntry] {
    &SAMPLE_CATALOG
}

#[rustfmt::skip]
static SAMPLE_CATALOG: [CatalogEntry; 80] = [
    // Rock Songs
    entry("Bohemian Rhapsody", "Queen", "A Night at the Opera", "Rock", "Progressive Rock", "Dramatic", 355, 72, 5),
    entry("Stairway to Heaven", "Led Zeppelin", "Led Zeppelin IV", "Rock", "Hard Rock", "Epic", 482, 82, 5),
    entry("Hotel California", "Eagles", "Hotel California", "Rock", "Soft Rock", "Mysterious", 391, 75, 5),
    entry("Sweet Child O' Mine", "Guns N' Roses", "Appetite for Destruction", "Rock", "Hard Rock", "Energetic", 356, 125, 4),
    entry("Smells Like Teen Spirit", "Nirvana", "Nevermind", "Rock", "Alternative Rock", "Aggressive", 301, 117, 4),
    entry("Wonderwall", "Oasis", "What's the Story Morning Glory?", "Rock", "Alternative Rock", "Nostalgic", 258, 87, 4),
    entry("Creep", "Radiohead", "Pablo Honey", "Rock", "Alternative Rock", "Melancholic", 238, 92, 4),
    entry("Black", "Pearl Jam", "Ten", "Rock", "Grunge", "Emotional", 341, 69, 4),
    entry("Paranoid Android", "Radiohead", "OK Computer", "Rock", "Alternative Rock", "Complex", 383, 64, 5),
    entry("Jeremy", "Pearl Jam", "Ten", "Rock", "Grunge", "Dark", 318, 86, 4),

    // Pop Songs
    entry("Shape of You", "Ed Sheeran", "÷", "Pop", "Pop Rock", "Happy", 233, 96, 4),
    entry("Blinding Lights", "The Weeknd", "After Hours", "Pop", "Synthpop", "Energetic", 200, 171, 5),
    entry("Bad Guy", "Billie Eilish", "When We All Fall Asleep Where Do We Go?", "Pop", "Electropop", "Dark", 194, 135, 4),
    entry("Levitating", "Dua Lipa", "Future Nostalgia", "Pop", "Dance Pop", "Upbeat", 203, 103, 4),
    entry("Anti-Hero", "Taylor Swift", "Midnights", "Pop", "Indie Pop", "Introspective", 200, 97, 4),
    entry("As It Was", "Harry Styles", "Harry's House", "Pop", "Pop Rock", "Nostalgic", 167, 173, 4),
    entry("Good 4 U", "Olivia Rodrigo", "Sour", "Pop", "Pop Punk", "Angry", 178, 166, 4),
    entry("Stay", "The Kid LAROI & Justin Bieber", "F*ck Love 3", "Pop", "Pop Rap", "Romantic", 141, 169, 3),
    entry("Watermelon Sugar", "Harry Styles", "Fine Line", "Pop", "Pop Rock", "Happy", 174, 95, 4),
    entry("Don't Start Now", "Dua Lipa", "Future Nostalgia", "Pop", "Dance Pop", "Confident", 183, 124, 4),

    // Hip Hop Songs
    entry("HUMBLE.", "Kendrick Lamar", "DAMN.", "Hip Hop", "Conscious Rap", "Aggressive", 177, 150, 5),
    entry("God's Plan", "Drake", "Scorpion", "Hip Hop", "Pop Rap", "Confident", 198, 77, 4),
    entry("Sicko Mode", "Travis Scott", "Astroworld", "Hip Hop", "Trap", "Dark", 312, 155, 4),
    entry("Old Town Road", "Lil Nas X", "7 EP", "Hip Hop", "Country Rap", "Fun", 113, 136, 3),
    entry("Lose Yourself", "Eminem", "8 Mile Soundtrack", "Hip Hop", "Hardcore Hip Hop", "Motivational", 326, 86, 5),
    entry("Alright", "Kendrick Lamar", "To Pimp a Butterfly", "Hip Hop", "Conscious Rap", "Hopeful", 219, 100, 5),
    entry("Money Trees", "Kendrick Lamar", "Good Kid M.A.A.D City", "Hip Hop", "West Coast Hip Hop", "Reflective", 384, 80, 4),
    entry("INDUSTRY BABY", "Lil Nas X & Jack Harlow", "Montero", "Hip Hop", "Pop Rap", "Confident", 212, 149, 3),
    entry("Life Is Good", "Future & Drake", "High Off Life", "Hip Hop", "Trap", "Boastful", 243, 81, 3),
    entry("Rockstar", "Post Malone & 21 Savage", "Beerbongs & Bentleys", "Hip Hop", "Pop Rap", "Braggadocious", 218, 160, 4),

    // Electronic Songs
    entry("Levels", "Avicii", "Original Mix", "Electronic", "Progressive House", "Euphoric", 203, 126, 4),
    entry("Titanium", "David Guetta ft. Sia", "Nothing But The Beat", "Electronic", "Electro House", "Empowering", 245, 126, 4),
    entry("Clarity", "Zedd ft. Foxes", "Clarity", "Electronic", "Progressive House", "Emotional", 271, 128, 4),
    entry("Animals", "Martin Garrix", "Single", "Electronic", "Big Room House", "Aggressive", 302, 128, 3),
    entry("Strobe", "Deadmau5", "For Lack of a Better Name", "Electronic", "Progressive House", "Atmospheric", 645, 128, 5),
    entry("One More Time", "Daft Punk", "Discovery", "Electronic", "French House", "Joyful", 320, 123, 5),
    entry("Midnight City", "M83", "Hurry Up We're Dreaming", "Electronic", "Synthwave", "Dreamy", 244, 104, 4),
    entry("Breathe Me", "Sia", "Colour The Small One", "Electronic", "Electropop", "Vulnerable", 268, 75, 4),
    entry("Scary Monsters and Nice Sprites", "Skrillex", "Scary Monsters and Nice Sprites", "Electronic", "Dubstep", "Chaotic", 225, 140, 3),
    entry("Ghosts 'n' Stuff", "Deadmau5", "For Lack of a Better Name", "Electronic", "Electro House", "Dark", 335, 128, 4),

    // Jazz Songs
    entry("Take Five", "Dave Brubeck Quartet", "Time Out", "Jazz", "Cool Jazz", "Sophisticated", 324, 175, 5),
    entry("Kind of Blue", "Miles Davis", "Kind of Blue", "Jazz", "Modal Jazz", "Contemplative", 567, 120, 5),
    entry("A Love Supreme", "John Coltrane", "A Love Supreme", "Jazz", "Spiritual Jazz", "Transcendent", 487, 80, 5),
    entry("So What", "Miles Davis", "Kind of Blue", "Jazz", "Modal Jazz", "Cool", 563, 132, 5),
    entry("Giant Steps", "John Coltrane", "Giant Steps", "Jazz", "Hard Bop", "Complex", 287, 290, 4),
    entry("Blue in Green", "Miles Davis", "Kind of Blue", "Jazz", "Modal Jazz", "Melancholic", 337, 66, 4),
    entry("Autumn Leaves", "Bill Evans Trio", "Sunday at the Village Vanguard", "Jazz", "Post Bop", "Nostalgic", 472, 108, 4),
    entry("Maiden Voyage", "Herbie Hancock", "Maiden Voyage", "Jazz", "Post Bop", "Adventurous", 503, 120, 4),
    entry("Summertime", "Ella Fitzgerald", "Porgy and Bess", "Jazz", "Vocal Jazz", "Dreamy", 253, 72, 4),
    entry("Round Midnight", "Thelonious Monk", "Genius of Modern Music", "Jazz", "Bebop", "Mysterious", 311, 55, 4),

    // Classical Songs
    entry("Symphony No. 9", "Ludwig van Beethoven", "Symphony No. 9", "Classical", "Romantic", "Triumphant", 4200, 120, 5),
    entry("The Four Seasons - Spring", "Antonio Vivaldi", "The Four Seasons", "Classical", "Baroque", "Joyful", 600, 100, 5),
    entry("Canon in D", "Johann Pachelbel", "Canon and Gigue", "Classical", "Baroque", "Peaceful", 360, 54, 4),
    entry("Für Elise", "Ludwig van Beethoven", "Bagatelle No. 25", "Classical", "Classical", "Gentle", 195, 120, 4),
    entry("Ave Maria", "Franz Schubert", "Ellens Gesang III", "Classical", "Romantic", "Sacred", 390, 72, 4),
    entry("Moonlight Sonata", "Ludwig van Beethoven", "Piano Sonata No. 14", "Classical", "Classical", "Melancholic", 900, 27, 5),
    entry("Eine kleine Nachtmusik", "Wolfgang Amadeus Mozart", "Serenade No. 13", "Classical", "Classical", "Elegant", 1800, 120, 4),
    entry("Clair de Lune", "Claude Debussy", "Suite Bergamasque", "Classical", "Impressionist", "Dreamy", 300, 50, 5),
    entry("The Blue Danube", "Johann Strauss II", "The Blue Danube", "Classical", "Romantic", "Graceful", 720, 180, 4),
    entry("Ride of the Valkyries", "Richard Wagner", "Die Walküre", "Classical", "Romantic", "Epic", 500, 138, 4),

    // Country Songs
    entry("Friends in Low Places", "Garth Brooks", "No Fences", "Country", "Country Pop", "Nostalgic", 259, 120, 4),
    entry("Sweet Caroline", "Neil Diamond", "Brother Love's Travelling Salvation Show", "Country", "Country Pop", "Happy", 201, 125, 4),
    entry("Wagon Wheel", "Darius Rucker", "True Believers", "Country", "Country Rock", "Uplifting", 191, 150, 3),
    entry("Cruise", "Florida Georgia Line", "Here's to the Good Times", "Country", "Country Pop", "Fun", 200, 120, 3),
    entry("Need You Now", "Lady Antebellum", "Need You Now", "Country", "Country Pop", "Longing", 236, 120, 4),
    entry("Before He Cheats", "Carrie Underwood", "Some Hearts", "Country", "Country Pop", "Vengeful", 199, 120, 4),
    entry("Body Like a Back Road", "Sam Hunt", "Montevallo", "Country", "Country Pop", "Romantic", 157, 98, 3),
    entry("Chicken Fried", "Zac Brown Band", "The Foundation", "Country", "Country Rock", "Carefree", 239, 120, 4),
    entry("Live Like You Were Dying", "Tim McGraw", "Live Like You Were Dying", "Country", "Country Pop", "Inspirational", 289, 76, 4),
    entry("Man! I Feel Like a Woman!", "Shania Twain", "Come On Over", "Country", "Country Pop", "Empowering", 298, 135, 4),

    // R&B Songs
    entry("Superstition", "Stevie Wonder", "Talking Book", "R&B", "Funk", "Groovy", 245, 100, 5),
    entry("What's Going On", "Marvin Gaye", "What's Going On", "R&B", "Soul", "Conscious", 231, 74, 5),
    entry("Respect", "Aretha Franklin", "I Never Loved a Man", "R&B", "Soul", "Empowering", 147, 115, 5),
    entry("I Want You Back", "The Jackson 5", "Diana Ross Presents The Jackson 5", "R&B", "Motown", "Joyful", 179, 100, 4),
    entry("Let's Stay Together", "Al Green", "Let's Stay Together", "R&B", "Southern Soul", "Romantic", 199, 96, 4),
    entry("I Heard It Through the Grapevine", "Marvin Gaye", "In the Groove", "R&B", "Motown", "Dramatic", 195, 82, 4),
    entry("My Girl", "The Temptations", "The Temptations Sing Smokey", "R&B", "Motown", "Loving", 175, 120, 4),
    entry("Stand By Me", "Ben E. King", "Don't Play That Song!", "R&B", "Doo-wop", "Comforting", 181, 118, 4),
    entry("I Got You (I Feel Good)", "James Brown", "Papa's Got a Brand New Bag", "R&B", "Funk", "Energetic", 158, 144, 4),
    entry("Sexual Healing", "Marvin Gaye", "Midnight Love", "R&B", "Contemporary R&B", "Sensual", 241, 103, 4),
];
