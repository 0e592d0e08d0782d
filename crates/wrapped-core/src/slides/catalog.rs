use crate::text_policy::percent_of;

use super::{
    Backdrop, Coupon, RatioShare, Rgb, SlideContext, SlideDefinition, SlideKey, SlideView,
    TimelineEntry,
};

const BLACK: Rgb = Rgb(0x00, 0x00, 0x00);
const HOT_PINK: Rgb = Rgb(0xff, 0x00, 0x55);
const ROSE: Rgb = Rgb(0xe9, 0x1e, 0x63);
const VIOLET: Rgb = Rgb(0x7b, 0x2c, 0xbf);
const CYAN: Rgb = Rgb(0x4c, 0xc9, 0xf0);
const ROYAL: Rgb = Rgb(0x43, 0x61, 0xee);
const MAGENTA: Rgb = Rgb(0xf7, 0x25, 0x85);
const RED: Rgb = Rgb(0xef, 0x23, 0x3c);
const PURPLE: Rgb = Rgb(0x83, 0x38, 0xec);
const WHITE: Rgb = Rgb(0xff, 0xff, 0xff);

const RUNNER_UP_FALLBACK: &str = "The Void";

const TIMELINE: [TimelineEntry; 4] = [
    TimelineEntry {
        date: "Jan",
        text: "The first \"good morning\" of the year",
    },
    TimelineEntry {
        date: "Feb 14",
        text: "Somebody forgot to reply for an hour",
    },
    TimelineEntry {
        date: "Aug",
        text: "Peak meme exchange season",
    },
    TimelineEntry {
        date: "Dec 30",
        text: "Still yapping",
    },
];

const MOODS: [&str; 4] = ["😭", "❤️", "💀", "🥺"];

const GALLERY_FRAMES: [&str; 8] = [
    "p1.jpg", "p2.jpg", "p3.jpg", "p4.jpg", "p1.jpg", "p2.jpg", "p3.jpg", "p4.jpg",
];

const COUPON: Coupon = Coupon {
    headline: "CONGRATS!",
    intro: "You unlocked a coupon:",
    title: "1 FREE DATE NIGHT",
    terms: "Valid forever. Non-refundable.",
    footer: "Screenshot this to redeem",
};

pub static CATALOG: [SlideDefinition; 15] = [
    SlideDefinition::new(SlideKey::Intro, Backdrop::new(BLACK, HOT_PINK), intro),
    SlideDefinition::new(
        SlideKey::Total,
        Backdrop::new(Rgb(0x12, 0x12, 0x12), VIOLET),
        total_messages,
    ),
    SlideDefinition::new(SlideKey::Media, Backdrop::new(Rgb(0x1a, 0x1a, 0x2e), CYAN), media),
    SlideDefinition::new(SlideKey::Recap, Backdrop::new(BLACK, ROYAL), timeline),
    SlideDefinition::new(
        SlideKey::Chatterbox,
        Backdrop::new(Rgb(0x0f, 0x34, 0x60), MAGENTA),
        chatterbox,
    ),
    SlideDefinition::new(SlideKey::Ratio, Backdrop::new(Rgb(0x2b, 0x2d, 0x42), RED), ratio),
    SlideDefinition::new(
        SlideKey::Time,
        Backdrop::new(Rgb(0x10, 0x00, 0x2b), VIOLET),
        peak_time,
    ),
    SlideDefinition::new(SlideKey::Chaos, Backdrop::new(BLACK, HOT_PINK), vibe_meter),
    SlideDefinition::new(SlideKey::Emojis, Backdrop::new(BLACK, PURPLE), moods),
    SlideDefinition::new(
        SlideKey::Words,
        Backdrop::new(Rgb(0xe9, 0x45, 0x60), CYAN),
        word_cloud,
    ),
    SlideDefinition::new(SlideKey::Gallery, Backdrop::new(BLACK, WHITE), gallery),
    SlideDefinition::new(
        SlideKey::Interactive,
        Backdrop::new(HOT_PINK, HOT_PINK),
        love_meter,
    ),
    SlideDefinition::new(SlideKey::Letter, Backdrop::new(BLACK, WHITE), letter),
    SlideDefinition::new(
        SlideKey::SummaryScroll,
        Backdrop::new(BLACK, HOT_PINK),
        summary_deck,
    ),
    SlideDefinition::new(SlideKey::Outro, Backdrop::new(BLACK, ROSE), outro),
];

fn intro<'a>(ctx: &SlideContext<'a>) -> Option<SlideView<'a>> {
    Some(SlideView::Intro {
        year: ctx.personalization.year,
        headline: "WRAPPED",
        tagline: "a year of us, in numbers",
    })
}

fn total_messages<'a>(ctx: &SlideContext<'a>) -> Option<SlideView<'a>> {
    Some(SlideView::TotalMessages {
        heading: "Total Messages",
        total: ctx.stats.total_messages(),
        period: ctx.stats.period(),
        quip: "That's a lot of yapping",
    })
}

fn media<'a>(ctx: &SlideContext<'a>) -> Option<SlideView<'a>> {
    Some(SlideView::Media {
        heading: "Meme Dealers",
        caption: "Total photos, videos & stickers:",
        media_shared: ctx.stats.media_shared(),
    })
}

fn timeline<'a>(_ctx: &SlideContext<'a>) -> Option<SlideView<'a>> {
    Some(SlideView::Timeline {
        heading: "Timeline",
        entries: &TIMELINE,
    })
}

fn chatterbox<'a>(ctx: &SlideContext<'a>) -> Option<SlideView<'a>> {
    Some(SlideView::Chatterbox {
        heading: "The Yap Champion",
        winner: ctx.stats.top_sender(),
        total: ctx.stats.total_messages(),
        authors: ctx.stats.authors(),
    })
}

fn ratio<'a>(ctx: &SlideContext<'a>) -> Option<SlideView<'a>> {
    let authors = ctx.stats.authors();
    let leader = authors.first()?;
    let runner_up_name = authors
        .get(1)
        .map(|author| author.name.as_str())
        .unwrap_or(RUNNER_UP_FALLBACK);

    let total = ctx.stats.total_messages() as u64;
    let denominator = if total > 0 {
        total
    } else {
        ctx.stats.author_sum()
    };
    let leader_percent = percent_of(leader.count as u64, denominator);

    Some(SlideView::Ratio {
        heading: "The Yap Ratio",
        leader: RatioShare {
            name: leader.name.as_str(),
            percent: leader_percent,
        },
        runner_up: RatioShare {
            name: runner_up_name,
            percent: 100 - leader_percent,
        },
    })
}

fn peak_time<'a>(ctx: &SlideContext<'a>) -> Option<SlideView<'a>> {
    Some(SlideView::PeakTime {
        heading: "Night Owls",
        lead_in: "Our chats heated up around:",
        label: ctx.stats.peak_time(),
    })
}

fn vibe_meter<'a>(_ctx: &SlideContext<'a>) -> Option<SlideView<'a>> {
    Some(SlideView::VibeMeter {
        heading: "Relationship Vibe",
        low_label: "Cute",
        high_label: "Chaos",
        percent: 85,
        verdict: "85% Chaotic Good",
    })
}

fn moods<'a>(_ctx: &SlideContext<'a>) -> Option<SlideView<'a>> {
    Some(SlideView::Moods {
        heading: "MOODS",
        caption: "The 4 stages of us:",
        moods: &MOODS,
    })
}

fn word_cloud<'a>(ctx: &SlideContext<'a>) -> Option<SlideView<'a>> {
    Some(SlideView::WordCloud {
        heading: "Vibe Check",
        words: ctx.stats.top_words(),
    })
}

fn gallery<'a>(_ctx: &SlideContext<'a>) -> Option<SlideView<'a>> {
    Some(SlideView::Gallery {
        heading: "Us Core",
        frames: &GALLERY_FRAMES,
        caption: "photo dump",
    })
}

fn love_meter<'a>(_ctx: &SlideContext<'a>) -> Option<SlideView<'a>> {
    Some(SlideView::LoveMeter {
        heading: "One Final Check",
        question: "How much do you love me?",
        low_label: "0% (i'll cry)",
        high_label: "100% (correct)",
        reward: COUPON,
    })
}

fn letter<'a>(ctx: &SlideContext<'a>) -> Option<SlideView<'a>> {
    Some(SlideView::Letter {
        recipient: ctx.personalization.recipient,
        body: ctx.personalization.letter,
        signoff: "Love,",
        signature: ctx.personalization.signature,
    })
}

fn summary_deck<'a>(ctx: &SlideContext<'a>) -> Option<SlideView<'a>> {
    Some(SlideView::SummaryDeck {
        year: ctx.personalization.year,
        total: ctx.stats.total_messages(),
        peak_time: ctx.stats.peak_time(),
        top_word: ctx.stats.top_word(),
        media_shared: ctx.stats.media_shared(),
    })
}

fn outro<'a>(_ctx: &SlideContext<'a>) -> Option<SlideView<'a>> {
    Some(SlideView::Outro {
        headline: "Happy Anniversary",
        message: "Yapping got us this far. What's next?",
    })
}
