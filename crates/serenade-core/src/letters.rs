//! Letter text: the home page prose and the song-inspired letter generator.
//!
//! Prose marks song titles inline as `<song>Title</song>`. The UI renders
//! those segments as clickable titles that select the track.

use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::{debug, info};

use crate::clock::ElapsedTime;
use crate::personalization::Personalization;
use crate::songs::SongRegistry;
use crate::types::Track;

const SONG_OPEN: &str = "<song>";
const SONG_CLOSE: &str = "</song>";

/// Piece of marked-up prose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Song(String),
}

/// Split prose into plain text and `<song>` segments.
///
/// An unterminated `<song>` tag is kept as plain text.
pub fn parse_segments(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut rest = text;

    while let Some(open) = rest.find(SONG_OPEN) {
        let after_open = &rest[open + SONG_OPEN.len()..];
        let Some(close) = after_open.find(SONG_CLOSE) else {
            break;
        };
        if open > 0 {
            segments.push(Segment::Text(rest[..open].to_string()));
        }
        segments.push(Segment::Song(after_open[..close].to_string()));
        rest = &after_open[close + SONG_CLOSE.len()..];
    }

    if !rest.is_empty() {
        segments.push(Segment::Text(rest.to_string()));
    }
    segments
}

/// Song titles referenced by a piece of prose, in order
pub fn song_titles(text: &str) -> Vec<String> {
    parse_segments(text)
        .into_iter()
        .filter_map(|s| match s {
            Segment::Song(title) => Some(title),
            Segment::Text(_) => None,
        })
        .collect()
}

/// The five paragraphs of the home letter. The last one closes the letter.
pub const HOME_PARAGRAPHS: [&str; 5] = [
    "Ever since you came into my life, everything has felt <song>Enchanted</song>. \
     You are my <song>Daylight</song> after so many grey days, my <song>Lover</song> \
     in a world that sometimes feels like <song>The Archer</song>. When we are together \
     it is like living a <song>Love Story</song> where every chapter beats the last.",
    "In your eyes, love, I see <song>All Too Well</song> every detail that makes me love \
     you more. Even when we face a <song>Cruel Summer</song>, your hug keeps me \
     <song>Safe & Sound</song>. With you every day is a <song>Begin Again</song>, and every \
     kiss tastes like <song>Sweet Nothing</song>.",
    "Love, you are my <song>Everything Has Changed</song>, my <song>End Game</song>, my \
     <song>Style</song>. And even when the world tries to knock us down I shout \
     <song>You Belong With Me</song>, because there is no <song>Bad Blood</song> between us, \
     only <song>Wildest Dreams</song> and promises of <song>Forever & Always</song>.",
    "If one day you feel lost, remember: I will never leave you like a \
     <song>Back To December</song>. You are my <song>Invisible String</song>, the fate that \
     pulled me all the way to you. And however much time goes by, my heart will keep \
     singing <song>You Are In Love</song>.",
    "With you, my princess, I am <song>Fearless</song>. And if the world ends tomorrow, \
     I want you to know I loved you with all the intensity of <song>Red</song>.",
];

/// Messages per song; `{toName}` is substituted with the recipient.
const SONG_MESSAGES: &[(&str, &[&str])] = &[
    ("Enchanted", &[
        "Just like in 'Enchanted', I was enchanted the minute we met. You brought magic into my life.",
        "As Taylor sings in 'Enchanted', I was spellbound from the very first look. You are my real fairy tale.",
        "As 'Enchanted' says: 'I was enchanted to meet you', and I can say the same about you, {toName}.",
    ]),
    ("Daylight", &[
        "Like in 'Daylight', you brought light into my darkness. Now I see everything in golden colors.",
        "Just like 'Daylight', you taught me that true love is like sunlight. It warms and lights up everything.",
        "As Taylor sings in 'Daylight', I want to be with you through every phase of life, {toName}.",
    ]),
    ("Lover", &[
        "You are my 'Lover': my partner, my best friend, my home. You are everything in one person.",
        "Like the song 'Lover', with you I found my lover for life. You are my forever.",
        "Just like in 'Lover', I want to grow old by your side, {toName}. You are my eternal love.",
    ]),
    ("The Archer", &[
        "Like 'The Archer', you see all of me, flaws and strengths alike. And you still love me.",
        "Just like in 'The Archer', you always hit the target of my heart. You truly know me.",
        "Like Taylor in 'The Archer', I wonder if you love me with all my faults. The answer is in your eyes.",
    ]),
    ("Love Story", &[
        "Our story is a real 'Love Story': you are my Juliet, but with a happy ending.",
        "Like in 'Love Story', all I can say is: 'Marry me, Juliet!' You will be my love forever.",
        "Our 'Love Story' is even more beautiful than the song's, because it is real and it is ours, {toName}.",
    ]),
    ("All Too Well", &[
        "Unlike 'All Too Well', I want our story to never end. I want to remember every good moment forever.",
        "Like in 'All Too Well', I remember every detail of our moments together, and every one is special.",
        "Unlike the sadness of 'All Too Well', our story is pure joy and true love.",
    ]),
    ("Cruel Summer", &[
        "Our summer was no 'Cruel Summer'. It was the sweetest of my life, because it was when I found you.",
        "Like in 'Cruel Summer', you are my favorite obsession. Every moment with you is intense and perfect.",
        "Unlike the 'Cruel Summer' of the song, our summer was pure love and discovery.",
    ]),
    ("Safe & Sound", &[
        "With you I feel 'Safe & Sound', protected and at peace. You are my safe harbor.",
        "Like the song 'Safe & Sound', by your side I find calm and safety, {toName}.",
        "You make me feel 'Safe & Sound' in a world full of uncertainty. You are my certainty.",
    ]),
    ("Begin Again", &[
        "Like 'Begin Again', you taught me it is possible to start over and be happy again. You are my new beginning.",
        "Just like 'Begin Again', with you I learn to love again. Every day is a fresh start.",
        "Like Taylor in 'Begin Again', I smile without noticing when I am with you. You make me happy so easily.",
    ]),
    ("Sweet Nothing", &[
        "Like 'Sweet Nothing', I don't need grand gestures. Your small moments of tenderness are everything to me.",
        "Just like in 'Sweet Nothing', you find beauty in simple things and teach me to treasure every detail.",
        "Like the song 'Sweet Nothing', our love is made of small sweet meaningful moments, {toName}.",
    ]),
    ("Everything Has Changed", &[
        "Like 'Everything Has Changed', since you arrived everything in my life changed for the better.",
        "Just like 'Everything Has Changed', you transformed my world completely. Everything makes sense now.",
        "As Taylor sings, 'Everything Has Changed', and it really has, because now I have you, {toName}.",
    ]),
    ("End Game", &[
        "You are my 'End Game': my final goal, my definitive person. I don't want anyone but you.",
        "Like the song 'End Game', you are everything I want for my life. You are my main plan.",
        "Just like in 'End Game', I want you to know you are my number one priority, {toName}.",
    ]),
    ("Style", &[
        "Our love has 'Style': timeless, elegant and never out of fashion. You are my favorite style.",
        "Like 'Style', our love is classic and eternal. What we feel will never go out of fashion.",
        "Just like the song 'Style', our love has a unique vibe that never fades.",
    ]),
    ("You Belong With Me", &[
        "Like 'You Belong With Me', I always knew we were made for each other. You belong with me.",
        "Just like the song, I want to shout to the world: 'You Belong With Me!' We are perfect together.",
        "As Taylor sings, you belong with me, {toName}. We are the perfect match.",
    ]),
    ("Bad Blood", &[
        "Unlike 'Bad Blood', between us there is only pure and true love. You are my peace.",
        "Unlike the song 'Bad Blood', our relationship is made of trust and care.",
        "The very opposite of 'Bad Blood', you brought harmony and love into my life.",
    ]),
    ("Wildest Dreams", &[
        "You surpassed my 'Wildest Dreams'. You are even better than I imagined in my craziest dreams.",
        "Like 'Wildest Dreams', I want you to remember me forever, but luckily you are real, not a dream.",
        "Just like the song, not even in my wildest dreams did I imagine a love as perfect as ours, {toName}.",
    ]),
    ("Forever & Always", &[
        "Like 'Forever & Always', my love for you is eternal. Forever and always you will be special to me.",
        "Just like the song, I promise to love you 'Forever & Always'. You are my love for life.",
        "As Taylor sings, it is 'Forever & Always', and that is exactly how I want to love you, {toName}.",
    ]),
    ("Back To December", &[
        "Unlike 'Back To December', I regret nothing about our past. Every moment was perfect.",
        "Unlike the song 'Back To December', I wouldn't change a thing in our story. It all went as it should.",
        "The opposite of 'Back To December': I don't want to go back in time, I want to move forward with you.",
    ]),
    ("Invisible String", &[
        "Like 'Invisible String', there was always an invisible thread tying us together. Fate brought us here.",
        "Just like the song, an 'Invisible String' has connected us all along. We were made for each other.",
        "As Taylor sings about the invisible string, I believe the universe conspired to bring us together, {toName}.",
    ]),
    ("You Are In Love", &[
        "Like 'You Are In Love', I can say it with certainty: you are in love, and so am I.",
        "Just like the song, every sign says 'You Are In Love', and I feel the same way about you.",
        "As the song describes, we are truly in love. It is pure and real, {toName}.",
    ]),
    ("Fearless", &[
        "Like 'Fearless', with you I feel brave enough to face anything. You give me strength.",
        "Just like the song, you make me feel 'Fearless': unafraid to love and to be happy.",
        "As Taylor sings, I am fearless when I am with you. You are my courage, {toName}.",
    ]),
    ("Red", &[
        "Like 'Red', our love is intense and vibrant. You brought color into my life.",
        "Just like the song, you paint my life 'Red': pure passion and intensity.",
        "Like in 'Red', our love is strong and unforgettable. You are the most beautiful color of my life.",
    ]),
];

/// Messages written for `title`; empty when there are none
pub fn messages_for(title: &str) -> &'static [&'static str] {
    SONG_MESSAGES
        .iter()
        .find(|(song, _)| *song == title)
        .map(|(_, messages)| *messages)
        .unwrap_or(&[])
}

/// A generated letter and the song it was written around.
#[derive(Debug, Clone, PartialEq)]
pub struct Letter {
    pub song: Track,
    pub body: String,
    pub secret: bool,
}

/// Picks a song with a playable url and writes a letter around it.
#[derive(Debug, Clone)]
pub struct LetterGenerator {
    songs: Vec<Track>,
}

impl LetterGenerator {
    /// Candidate songs: those that have both messages and a playable url.
    pub fn new(registry: &SongRegistry) -> Self {
        let songs: Vec<Track> = SONG_MESSAGES
            .iter()
            .filter_map(|(title, _)| registry.track(title, false))
            .collect();
        debug!(candidates = songs.len(), "Letter generator ready");
        Self { songs }
    }

    pub fn candidates(&self) -> &[Track] {
        &self.songs
    }

    /// Write an ordinary letter. `None` when no song is playable.
    pub fn generate<R: Rng>(
        &self,
        rng: &mut R,
        names: &Personalization,
        elapsed: ElapsedTime,
    ) -> Option<Letter> {
        self.compose(rng, names, elapsed, false)
    }

    /// Write the letter revealed after the puzzle is solved.
    pub fn generate_secret<R: Rng>(
        &self,
        rng: &mut R,
        names: &Personalization,
        elapsed: ElapsedTime,
    ) -> Option<Letter> {
        self.compose(rng, names, elapsed, true)
    }

    fn compose<R: Rng>(
        &self,
        rng: &mut R,
        names: &Personalization,
        elapsed: ElapsedTime,
        secret: bool,
    ) -> Option<Letter> {
        let song = self.songs.choose(rng)?.clone();
        let message = messages_for(&song.title).choose(rng).copied().unwrap_or("");
        let opening = names.render(message);
        let sender = names.sender();

        let body = if secret {
            format!(
                "💎 {opening}\n\n\
                 Congratulations on solving our special puzzle! It proves you really know me \
                 and care about me. This letter is only ours, a beautiful secret between the two of us.\n\n\
                 {time}\n\n\
                 You are my most beautiful secret, my most precious treasure. This song always \
                 reminds me of you, and now it will also remind me of this moment only we share.\n\n\
                 Every time \"{title}\" plays, I will smile thinking about how clever and sweet \
                 you were to make it all the way here.\n\n\
                 With all my secret and eternal love,\n{sender} 💕🔐\n\n\
                 P.S.: Keep this moment in your heart, because it is only ours. You are the most \
                 special person in the world to me. 💎",
                time = time_sentence(elapsed, "is a treasure I keep in my heart"),
                title = song.title,
            )
        } else {
            format!(
                "💕 {opening}\n\n{time}\n\nWith all my love and affection,\n{sender} 💌",
                time = time_sentence(elapsed, "by your side is precious"),
            )
        };

        info!(song = %song.title, secret, "Letter generated");
        Some(Letter { song, body, secret })
    }
}

fn time_sentence(elapsed: ElapsedTime, every_second: &str) -> String {
    if elapsed.days > 0 {
        format!(
            "I have loved you for exactly {}. Every second {}! 💖",
            elapsed, every_second
        )
    } else {
        "I love you with all the intensity of my heart and want to spend my whole life by your side! 💖"
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_parse_segments() {
        let segments = parse_segments("I feel <song>Enchanted</song> tonight");
        assert_eq!(
            segments,
            vec![
                Segment::Text("I feel ".into()),
                Segment::Song("Enchanted".into()),
                Segment::Text(" tonight".into()),
            ]
        );
    }

    #[test]
    fn test_parse_adjacent_and_unterminated() {
        let segments = parse_segments("<song>Red</song><song>Style</song> and <song>Karma");
        assert_eq!(
            segments,
            vec![
                Segment::Song("Red".into()),
                Segment::Song("Style".into()),
                Segment::Text(" and <song>Karma".into()),
            ]
        );
    }

    #[test]
    fn test_home_paragraphs_reference_configured_songs() {
        let registry = SongRegistry::builtin();
        let titles: Vec<String> = HOME_PARAGRAPHS.iter().flat_map(|p| song_titles(p)).collect();
        assert_eq!(titles.len(), 22);
        assert!(titles.iter().all(|t| registry.has_url(t)));
    }

    #[test]
    fn test_every_message_song_has_three_messages() {
        for (title, messages) in SONG_MESSAGES {
            assert_eq!(messages.len(), 3, "{}", title);
        }
    }

    #[test]
    fn test_generate_with_names_and_time() {
        let generator = LetterGenerator::new(&SongRegistry::builtin());
        let names = Personalization::new("Ana", "Bruno");
        let elapsed = ElapsedTime::from_seconds(3 * 86_400 + 61);
        let mut rng = StdRng::seed_from_u64(1);

        let letter = generator.generate(&mut rng, &names, elapsed).unwrap();
        assert!(!letter.secret);
        assert!(!letter.song.url.is_empty());
        assert!(!letter.body.contains("{toName}"));
        assert!(letter.body.contains("3 days"));
        assert!(letter.body.ends_with("Ana 💌"));
    }

    #[test]
    fn test_generate_without_days_or_sender() {
        let generator = LetterGenerator::new(&SongRegistry::builtin());
        let mut rng = StdRng::seed_from_u64(2);
        let letter = generator
            .generate(&mut rng, &Personalization::default(), ElapsedTime::default())
            .unwrap();
        assert!(letter.body.contains("whole life by your side"));
        assert!(letter.body.contains("Your secret admirer"));
    }

    #[test]
    fn test_secret_letter_names_song() {
        let generator = LetterGenerator::new(&SongRegistry::builtin());
        let mut rng = StdRng::seed_from_u64(3);
        let letter = generator
            .generate_secret(&mut rng, &Personalization::default(), ElapsedTime::default())
            .unwrap();
        assert!(letter.secret);
        assert!(letter.body.contains(&format!("\"{}\"", letter.song.title)));
        assert!(letter.body.contains("P.S."));
    }

    #[test]
    fn test_no_playable_songs() {
        let generator = LetterGenerator::new(&SongRegistry::empty());
        let mut rng = StdRng::seed_from_u64(4);
        assert!(generator
            .generate(&mut rng, &Personalization::default(), ElapsedTime::default())
            .is_none());
    }
}
