use crate::mood::model::Mood;

/// A keyword set that maps text to one mood.
///
/// Keywords are stored lower-cased; matching is plain substring search.
#[derive(Clone, Copy, Debug)]
pub struct MoodRule {
    pub mood: Mood,
    pub keywords: &'static [&'static str],
}

impl MoodRule {
    /// First keyword found in already lower-cased `text`.
    pub fn find_in(&self, lowered: &str) -> Option<&'static str> {
        self.keywords.iter().copied().find(|k| lowered.contains(k))
    }
}

/// Rules in priority order. The first rule with any hit wins, so entries that
/// contain another rule's keyword ("不开心" vs "开心", "hopeless" vs "hope") must
/// sit above it. Jealousy and envy share "嫉妒"; jealousy wins.
pub const MOOD_RULES: &[MoodRule] = &[
    MoodRule {
        mood: Mood::Sadness,
        keywords: &[
            "不开心", "不高兴", "不快乐", "难过", "伤心", "失落", "想哭", "哭了", "心碎",
            "unhappy", "hopeless", "heartbroken", "depressed", "sad",
        ],
    },
    MoodRule {
        mood: Mood::Anxiety,
        keywords: &[
            "焦虑", "紧张", "担心", "不安", "害怕", "心慌", "anxious", "anxiety", "nervous",
            "worried", "panic",
        ],
    },
    MoodRule {
        mood: Mood::Overwhelm,
        keywords: &["崩溃", "受不了", "喘不过气", "撑不住", "overwhelm"],
    },
    MoodRule {
        mood: Mood::Stress,
        keywords: &["压力", "好忙", "太忙", "忙死", "deadline", "stress", "pressure"],
    },
    MoodRule {
        mood: Mood::Fatigue,
        keywords: &[
            "累", "疲惫", "好困", "犯困", "没精神", "熬夜", "tired", "exhausted", "sleepy",
            "fatigue",
        ],
    },
    MoodRule {
        mood: Mood::Lonely,
        keywords: &["孤独", "寂寞", "孤单", "一个人", "没人", "lonely", "alone"],
    },
    MoodRule {
        mood: Mood::Anger,
        keywords: &["生气", "愤怒", "气死", "火大", "讨厌", "angry", "furious", "pissed"],
    },
    MoodRule {
        mood: Mood::Frustration,
        keywords: &["烦", "郁闷", "沮丧", "挫败", "无语", "frustrat", "annoyed", "annoying"],
    },
    MoodRule {
        mood: Mood::Shame,
        keywords: &["丢脸", "羞耻", "尴尬", "难堪", "ashamed", "embarrass", "shame"],
    },
    MoodRule {
        mood: Mood::Guilt,
        keywords: &["愧疚", "内疚", "自责", "对不起", "guilty", "guilt", "sorry"],
    },
    MoodRule {
        mood: Mood::Jealousy,
        keywords: &["嫉妒", "吃醋", "jealous"],
    },
    MoodRule {
        mood: Mood::Envy,
        keywords: &["羡慕", "眼红", "嫉妒", "envy", "envious"],
    },
    MoodRule {
        mood: Mood::Confusion,
        keywords: &[
            "迷茫", "困惑", "纠结", "不知道", "不明白", "confus", "don't know", "unsure",
            "puzzled",
        ],
    },
    MoodRule {
        mood: Mood::Bored,
        keywords: &["无聊", "没意思", "没劲", "bored", "boring"],
    },
    MoodRule {
        mood: Mood::Gratitude,
        keywords: &["谢谢", "感谢", "感恩", "多谢", "thank", "grateful"],
    },
    MoodRule {
        mood: Mood::Love,
        keywords: &["爱", "喜欢", "想你", "心动", "love"],
    },
    MoodRule {
        mood: Mood::Pride,
        keywords: &["骄傲", "自豪", "做到了", "成功", "proud"],
    },
    MoodRule {
        mood: Mood::Excitement,
        keywords: &[
            "激动", "兴奋", "期待", "太棒", "excited", "can't wait", "awesome",
        ],
    },
    MoodRule {
        mood: Mood::Joy,
        keywords: &[
            "开心", "快乐", "高兴", "幸福", "哈哈", "愉快", "happy", "joy", "glad", "yay",
        ],
    },
    MoodRule {
        mood: Mood::Relief,
        keywords: &[
            "松了口气", "松了一口气", "如释重负", "解脱", "终于", "relieved", "relief",
        ],
    },
    MoodRule {
        mood: Mood::Calm,
        keywords: &["平静", "安静", "放松", "宁静", "淡定", "calm", "peace", "relax"],
    },
    MoodRule {
        mood: Mood::Hope,
        keywords: &["希望", "加油", "会好的", "相信", "hope"],
    },
];

/// Rule that decides the mood of `text`, if any.
pub fn matching_rule(text: &str) -> Option<&'static MoodRule> {
    let lowered = text.to_lowercase();
    MOOD_RULES
        .iter()
        .find(|rule| rule.find_in(&lowered).is_some())
}

/// Infer a mood from free text; `Mood::Neutral` when nothing matches.
pub fn classify(text: &str) -> Mood {
    matching_rule(text).map_or(Mood::Neutral, |rule| rule.mood)
}

#[cfg(test)]
#[path = "../../tests/unit/mood/classify.rs"]
mod tests;
