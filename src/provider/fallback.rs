use crate::types::Thought;
use rand::Rng;

const FALLBACK_STATEMENTS: [&str; 3] = [
    "Knowledge grows when we admit what we do not know; character grows when we keep promises nobody sees; and peace grows when we stop measuring ourselves against others.",
    "Patience turns effort into skill; honesty turns mistakes into lessons; and kindness turns strangers into allies.",
    "We become what we repeat each day; we understand others when we listen without waiting to reply; and we find freedom when we accept what we cannot control.",
];

const FALLBACK_TRANSLATIONS: [&str; 3] = [
    "تنمو المعرفة حين نعترف بما لا نعرفه؛ وينمو الخلق حين نفي بوعود لا يراها أحد؛ وينمو السلام حين نكف عن مقارنة أنفسنا بالآخرين.",
    "الصبر يحول الجهد إلى مهارة؛ والصدق يحول الأخطاء إلى دروس؛ واللطف يحول الغرباء إلى حلفاء.",
    "نصبح ما نكرره كل يوم؛ ونفهم الآخرين حين نصغي دون انتظار الرد؛ ونجد الحرية حين نتقبل ما لا نستطيع التحكم فيه.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackStatement {
    pub index: usize,
    pub text: &'static str,
}

pub fn fallback_count() -> usize {
    FALLBACK_STATEMENTS.len()
}

pub fn fallback_primary_statement<R: Rng + ?Sized>(rng: &mut R) -> FallbackStatement {
    let index = rng.gen_range(0..FALLBACK_STATEMENTS.len());
    FallbackStatement {
        index,
        text: FALLBACK_STATEMENTS[index],
    }
}

/// Translation paired with `index`, or a random one. Out-of-range indices
/// wrap around.
pub fn fallback_translated_statement<R: Rng + ?Sized>(index: Option<usize>, rng: &mut R) -> &'static str {
    let index = index.unwrap_or_else(|| rng.gen_range(0..FALLBACK_TRANSLATIONS.len()));
    FALLBACK_TRANSLATIONS[index % FALLBACK_TRANSLATIONS.len()]
}

pub fn fallback_pair(index: usize) -> Option<Thought> {
    let primary = FALLBACK_STATEMENTS.get(index)?;
    let arabic = FALLBACK_TRANSLATIONS.get(index)?;
    Some(Thought::new(*primary, *arabic))
}

pub fn fallback_thought<R: Rng + ?Sized>(rng: &mut R) -> Thought {
    let primary = fallback_primary_statement(rng);
    let arabic = fallback_translated_statement(Some(primary.index), rng);
    Thought::new(primary.text, arabic)
}
