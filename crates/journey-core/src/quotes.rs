//! Daily quote rotation and the built-in quote collections.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::storage::{keys, KvStore};

/// A verse with its translation and reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quote {
    /// Verse in the original script (Arabic or Urdu).
    pub original: &'static str,
    pub english: &'static str,
    pub reference: &'static str,
}

const fn quote(original: &'static str, english: &'static str, reference: &'static str) -> Quote {
    Quote {
        original,
        english,
        reference,
    }
}

/// Rotated one per day on the home screen.
pub const DAILY_QUOTES: &[Quote] = &[
    quote(
        "وَمَن يَتَّقِ اللَّهَ يَجْعَل لَّهُ مَخْرَجًا",
        "And whoever fears Allah, He will make for him a way out",
        "Quran 65:2",
    ),
    quote(
        "إِنَّ مَعَ الْعُسْرِ يُسْرًا",
        "Indeed, with hardship comes ease",
        "Quran 94:6",
    ),
    quote(
        "وَاللَّهُ يُحِبُّ الصَّابِرِينَ",
        "And Allah loves the patient",
        "Quran 3:146",
    ),
    quote(
        "وَمَن جَاهَدَ فَإِنَّمَا يُجَاهِدُ لِنَفْسِهِ",
        "And whoever strives, strives only for himself",
        "Quran 29:6",
    ),
    quote(
        "إِنَّ اللَّهَ لَا يُغَيِّرُ مَا بِقَوْمٍ حَتَّىٰ يُغَيِّرُوا مَا بِأَنفُسِهِمْ",
        "Indeed, Allah will not change the condition of a people until they change what is in themselves",
        "Quran 13:11",
    ),
    quote(
        "وَالَّذِينَ هُمْ لِفُرُوجِهِمْ حَافِظُونَ",
        "And those who guard their private parts",
        "Quran 23:5",
    ),
    quote(
        "إِنَّ اللَّهَ يُحِبُّ التَّوَّابِينَ وَيُحِبُّ الْمُتَطَهِّرِينَ",
        "Indeed, Allah loves those who repent and those who purify themselves",
        "Quran 2:222",
    ),
];

/// Recovery collection (Urdu with English translation).
pub const RECOVERY_QUOTES: &[Quote] = &[
    quote(
        "اللہ سے ڈرو اور جان لو کہ اللہ تمہارے ساتھ ہے",
        "Fear Allah and know that Allah is with you",
        "Quran 2:194",
    ),
    quote(
        "جو شخص توبہ کرے اور نیک عمل کرے تو اللہ اس کی برائیوں کو نیکیوں سے بدل دیتا ہے",
        "Whoever repents and does good deeds, Allah will change their evil deeds into good ones",
        "Quran 25:70",
    ),
    quote(
        "اور جو اللہ سے ڈرے، اللہ اس کے لیے نکلنے کا راستہ بنا دیتا ہے",
        "And whoever fears Allah, He will make for him a way out",
        "Quran 65:2",
    ),
    quote(
        "اللہ کے ذکر سے دل اطمینان پاتے ہیں",
        "In the remembrance of Allah do hearts find rest",
        "Quran 13:28",
    ),
    quote(
        "اور جو صبر کرے اور معاف کر دے تو یہ بہت ہمت کا کام ہے",
        "And whoever is patient and forgives, indeed that is of the matters of determination",
        "Quran 42:43",
    ),
    quote(
        "نماز بے حیائی اور برائی سے روکتی ہے",
        "Prayer prevents immorality and wrongdoing",
        "Quran 29:45",
    ),
    quote(
        "اور جو اللہ پر بھروسہ کرے تو وہ اس کے لیے کافی ہے",
        "And whoever relies upon Allah, then He is sufficient for him",
        "Quran 65:3",
    ),
    quote(
        "اللہ توبہ کرنے والوں سے محبت کرتا ہے",
        "Allah loves those who repent",
        "Quran 2:222",
    ),
    quote(
        "اور انسان کے لیے وہی کچھ ہے جس کی وہ کوشش کرے",
        "And that there is nothing for man except what he strives for",
        "Quran 53:39",
    ),
    quote(
        "جو شخص اللہ کی راہ میں جہاد کرے تو وہ اپنے لیے جہاد کرتا ہے",
        "Whoever strives, strives only for himself",
        "Quran 29:6",
    ),
];

/// Short encouragement lines shown alongside the recovery collection.
pub const MOTIVATIONAL_LINES: &[&str] = &[
    "Your past does not define your future. Every moment is a chance to begin again.",
    "Strength doesn't come from what you can do. It comes from overcoming what you thought you couldn't.",
    "The struggle you're in today is developing the strength you need for tomorrow.",
    "Recovery is not a destination, it's a daily choice to live better.",
    "You are stronger than your urges. You are bigger than your addiction.",
    "Every clean day is a victory. Celebrate your progress, no matter how small.",
    "Your future self is counting on the decisions you make today.",
    "Healing begins when you choose to face your struggles with courage.",
];

/// Persisted rotation position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRotation {
    pub last_shown_date: Option<String>,
    pub current_index: Option<usize>,
}

impl QuoteRotation {
    pub fn load<S: KvStore>(store: &S) -> Result<Self> {
        let last_shown_date = store.get(keys::LAST_QUOTE_DATE)?;
        let current_index = match store.get(keys::CURRENT_QUOTE_INDEX)? {
            Some(raw) => {
                let parsed = raw.trim().parse::<usize>().ok();
                if parsed.is_none() {
                    tracing::warn!(value = %raw, "ignoring unparseable quote index");
                }
                parsed
            }
            None => None,
        };
        Ok(Self {
            last_shown_date,
            current_index,
        })
    }

    /// Index of today's quote, advancing once per calendar day.
    ///
    /// The first rotation ever lands on index 0.
    pub fn quote_for_today<S: KvStore>(
        &mut self,
        store: &S,
        today: NaiveDate,
        quote_count: usize,
    ) -> Result<usize> {
        if quote_count == 0 {
            return Ok(0);
        }
        let today = today.format("%Y-%m-%d").to_string();
        if self.last_shown_date.as_deref() == Some(today.as_str()) {
            return Ok(self.current_index.unwrap_or(0) % quote_count);
        }

        let next = self
            .current_index
            .map_or(0, |i| (i % quote_count + 1) % quote_count);
        self.current_index = Some(next);
        store.set(keys::CURRENT_QUOTE_INDEX, &next.to_string())?;
        store.set(keys::LAST_QUOTE_DATE, &today)?;
        self.last_shown_date = Some(today);
        Ok(next)
    }

    /// User-requested next quote. Does not touch the rotation date, so the
    /// same day keeps showing the advanced quote after a restart.
    pub fn advance_manually<S: KvStore>(&mut self, store: &S, quote_count: usize) -> Result<usize> {
        if quote_count == 0 {
            return Ok(0);
        }
        let next = (self.current_index.unwrap_or(0) % quote_count + 1) % quote_count;
        self.current_index = Some(next);
        store.set(keys::CURRENT_QUOTE_INDEX, &next.to_string())?;
        Ok(next)
    }
}
