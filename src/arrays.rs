//! Small transformations over lists of numbers and strings.

const RGB: [&str; 3] = ["red", "blue", "green"];
const SHORT_WORD_LENGTH: usize = 4;

/// First and last element. A single element is repeated, an empty list stays empty.
pub fn book_end_list(numbers: &[i64]) -> Vec<i64> {
    match (numbers.first(), numbers.last()) {
        (Some(&first), Some(&last)) => vec![first, last],
        _ => Vec::new(),
    }
}

pub fn triple_numbers(numbers: &[i64]) -> Vec<i64> {
    numbers.iter().map(|number| number * 3).collect()
}

/// Parses each string as a base-10 integer; anything unparsable becomes 0.
pub fn strings_to_integers<S: AsRef<str>>(numbers: &[S]) -> Vec<i64> {
    numbers
        .iter()
        .map(|text| parse_int(text.as_ref()).unwrap_or(0))
        .collect()
}

/// Like [`strings_to_integers`], but the first `$` is dropped before parsing.
pub fn remove_dollars<S: AsRef<str>>(amounts: &[S]) -> Vec<i64> {
    amounts
        .iter()
        .map(|amount| {
            let amount: &str = amount.as_ref();
            parse_int(&amount.replacen('$', "", 1)).unwrap_or(0)
        })
        .collect()
}

/// Uppercases messages ending in `!` and drops those ending in `?`.
pub fn shout_if_exclaiming<S: AsRef<str>>(messages: &[S]) -> Vec<String> {
    messages
        .iter()
        .filter_map(|message| {
            let message: &str = message.as_ref();
            if message.ends_with('!') {
                Some(message.to_uppercase())
            } else if message.ends_with('?') {
                None
            } else {
                Some(message.to_string())
            }
        })
        .collect()
}

pub fn count_short_words<S: AsRef<str>>(words: &[S]) -> usize {
    words
        .iter()
        .map(|word| -> usize { AsRef::<str>::as_ref(word).chars().count() })
        .filter(|&length| length < SHORT_WORD_LENGTH)
        .count()
}

/// True when every color is red, blue or green (vacuously true when empty).
pub fn all_rgb<S: AsRef<str>>(colors: &[S]) -> bool {
    colors.iter().all(|color| RGB.contains(&color.as_ref()))
}

/// Renders the addition as `"<sum>=<a>+<b>+..."`, or `"0=0"` for no addends.
pub fn make_math(addends: &[i64]) -> String {
    let sum: i64 = addends.iter().sum();
    if addends.is_empty() {
        return format!("{}=0", sum);
    }

    let terms: Vec<String> = addends.iter().map(|addend| addend.to_string()).collect();
    format!("{}={}", sum, terms.join("+"))
}

/// Inserts the running sum right after the first negative number, or appends
/// the total when there is none.
pub fn inject_positive(values: &[i64]) -> Vec<i64> {
    let mut result = Vec::with_capacity(values.len() + 1);
    let mut sum = 0;
    let mut injected = false;

    for &value in values {
        result.push(value);
        if value < 0 && !injected {
            result.push(sum);
            injected = true;
        }
        sum += value;
    }

    if !injected {
        result.push(sum);
    }
    result
}

/// Leading-prefix integer parse: skips leading whitespace, accepts one sign,
/// then reads digits until the first non-digit. `None` when no digit is found.
pub(crate) fn parse_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude = rest[..digits_len]
        .bytes()
        .fold(0i64, |acc, digit| {
            acc.saturating_mul(10).saturating_add(i64::from(digit - b'0'))
        });

    Some(if negative { -magnitude } else { magnitude })
}
