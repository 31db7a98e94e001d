//! Canned response pools.
//!
//! Static, read-only authored data. Every intent resolves to a non-empty
//! pool, so the selector has no failure path. The greeting pool is keyed
//! by mood with `Friendly` as the defined fallback key; the rest are flat.
//! Text is Russian, matching the résumé site the assistant fronts.

use crate::intent::Intent;
use crate::mood::Mood;

/// Greeting variants per mood. All six moods are covered; `greeting_pool`
/// still falls back to `Friendly` should a row ever be removed.
const GREETINGS: &[(Mood, &[&str])] = &[
    (
        Mood::Friendly,
        &[
            "Привет! Чем могу помочь?",
            "Здравствуйте! Готов ответить на ваши вопросы.",
            "Приветствую! Что вас интересует?",
        ],
    ),
    (
        Mood::Professional,
        &[
            "Добрый день. Готов ответить на вопросы по резюме.",
            "Здравствуйте. Какой раздел резюме вас интересует?",
            "Приветствую. Чем могу быть полезен?",
        ],
    ),
    (
        Mood::Casual,
        &[
            "Привет! Спрашивай, не стесняйся.",
            "Хей! Что хочешь узнать?",
            "Привет-привет! О чем поговорим?",
        ],
    ),
    (
        Mood::Enthusiastic,
        &[
            "Привет! Отлично, что заглянули!",
            "Приветствую! Обожаю рассказывать про это резюме!",
            "Привет! Сейчас все покажу и расскажу!",
        ],
    ),
    (
        Mood::Curious,
        &[
            "Привет! Интересно, что вас сюда привело?",
            "Здравствуйте! Любопытно, с какого раздела начнем?",
            "Привет! А что вам интереснее — навыки или проекты?",
        ],
    ),
    (
        Mood::Helpful,
        &[
            "Привет! Подскажу все, что знаю о резюме.",
            "Здравствуйте! Помогу разобраться с любым разделом.",
            "Привет! Спрашивайте — помогу найти нужный раздел.",
        ],
    ),
];

const RESUME_OVERVIEW: &[&str] = &[
    "В резюме есть информация об опыте работы, навыках, образовании и контактах. Используйте меню слева для навигации!",
    "Резюме разбито на разделы: навыки, опыт работы, образование и контакты. С какого начнем?",
];

const SKILLS: &[&str] = &[
    "Работаю с JavaScript/TypeScript, React, Node.js, CSS и другими современными технологиями. Подробнее в разделе \"Навыки\"!",
    "Использую современный стек: React, TypeScript, Node.js. Все навыки указаны в разделе \"Навыки\".",
    "Владею различными технологиями веб-разработки. Смотрите раздел \"Навыки\" для деталей.",
];

const EXPERIENCE: &[&str] = &[
    "Есть опыт работы в различных компаниях. Подробности в разделе \"Опыт работы\".",
    "Об опыте работы лучше всего расскажет раздел \"Опыт работы\" — там все должности и периоды.",
];

const EDUCATION: &[&str] = &[
    "Информация об образовании находится в разделе \"Образование\".",
    "Об учебе — в разделе \"Образование\": вуз, степень и специализация.",
];

const CONTACTS: &[&str] = &[
    "Все контакты для связи в разделе \"Контакты\". Там email, GitHub, Telegram и другие способы связи!",
    "Написать можно любым способом из раздела \"Контакты\" — почта отвечает быстрее всего.",
];

const PROJECTS: &[&str] = &[
    "Сайт создан на React, TypeScript и современных веб-технологиях. Интерфейс в стиле мессенджера.",
    "Пет-проекты и этот сайт-резюме — в разделе с проектами. Код открыт на GitHub.",
];

const HOBBIES: &[&str] = &[
    "В свободное время изучаю новые технологии и ковыряю пет-проекты.",
    "Люблю читать про разработку, пробовать новые фреймворки и гулять подальше от монитора.",
];

const GAMES: &[&str] = &[
    "Иногда играю — в основном стратегии и инди. Но большую часть времени отдаю коду.",
    "Игры люблю, особенно головоломки: отличный способ перезагрузиться.",
];

const WHO_ARE_YOU: &[&str] = &[
    "Я AI-ассистент, помогаю узнать больше о резюме. Задавайте вопросы!",
    "Ассистент этого резюме. Спросите про навыки, опыт или контакты.",
];

const HOW_ARE_YOU: &[&str] = &[
    "Все отлично! Готов помочь узнать больше о резюме.",
    "Лучше всех — посетители задают вопросы, я отвечаю.",
];

const THANKS: &[&str] = &[
    "Пожалуйста! Всегда рад помочь.",
    "Не за что! Если будут вопросы - спрашивайте.",
    "Рад был помочь!",
];

const GOODBYE: &[&str] = &[
    "До встречи! Возвращайтесь, если появятся вопросы.",
    "Пока! Удачного дня.",
    "До свидания! Рад был пообщаться.",
];

const SHORT_MESSAGE: &[&str] = &[
    "Понял. Уточните, пожалуйста, что именно вас интересует?",
    "Можете задать вопрос о резюме, навыках или опыте работы.",
    "Чем могу помочь? Спросите о резюме!",
];

const WHAT_QUESTION: &[&str] = &[
    "Могу рассказать о навыках, опыте работы, образовании или контактах. Что именно интересует?",
    "Смотря что: про резюме знаю все. Уточните раздел!",
];

const HOW_QUESTION: &[&str] = &[
    "Могу объяснить подробнее. Уточните, о чем именно вы спрашиваете?",
    "Хороший вопрос \"как\". Расскажу, если уточните тему.",
];

const WHY_QUESTION: &[&str] = &[
    "Хороший вопрос! Расскажу, если уточните, что именно вас удивило.",
    "Обычно за \"почему\" стоит практика. Спросите про конкретный раздел!",
];

const COMPANY_MENTION: &[&str] = &[
    "Про эту компанию подробности есть в разделе \"Опыт работы\".",
];

const TECHNOLOGY_MENTION: &[&str] = &[
    "С этой технологией знаком — уровень владения указан в разделе \"Навыки\".",
];

const FALLBACK: &[&str] = &[
    "Интересный вопрос! Могу рассказать о моем опыте, навыках или образовании. Что именно вас интересует?",
    "Хороший вопрос! Посмотрите разделы резюме - там много полезной информации.",
    "Понял ваш вопрос. Могу помочь узнать больше о резюме. Попробуйте спросить о навыках, опыте работы или образовании.",
    "Давайте поговорим! Что вас больше всего интересует в резюме?",
    "Могу ответить на вопросы о резюме. Спросите о навыках, опыте, образовании или контактах.",
];

/// Continuation templates. `{topic}` is replaced with the context's last
/// discussed topic before rendering.
pub const CONTINUATIONS: &[&str] = &[
    "Кстати, мы уже говорили про {topic} — могу рассказать подробнее.",
    "Возвращаясь к теме «{topic}»: спрашивайте, если что-то осталось неясным.",
    "Если вернуться к теме {topic} — там есть еще детали, о которых я не упомянул.",
];

/// Greeting pool for a mood, falling back to the Friendly row
pub fn greeting_pool(mood: Mood) -> &'static [&'static str] {
    GREETINGS
        .iter()
        .find(|(m, _)| *m == mood)
        .or_else(|| GREETINGS.iter().find(|(m, _)| *m == Mood::Friendly))
        .map(|(_, pool)| *pool)
        .unwrap_or(FALLBACK)
}

/// Resolve the candidate pool for an intent under the current mood
pub fn pool_for(intent: Intent, mood: Mood) -> &'static [&'static str] {
    match intent {
        Intent::Greeting => greeting_pool(mood),
        Intent::ResumeOverview => RESUME_OVERVIEW,
        Intent::Skills => SKILLS,
        Intent::Experience => EXPERIENCE,
        Intent::Education => EDUCATION,
        Intent::Contacts => CONTACTS,
        Intent::Projects => PROJECTS,
        Intent::Hobbies => HOBBIES,
        Intent::Games => GAMES,
        Intent::WhoAreYou => WHO_ARE_YOU,
        Intent::HowAreYou => HOW_ARE_YOU,
        Intent::Thanks => THANKS,
        Intent::Goodbye => GOODBYE,
        Intent::ShortMessage => SHORT_MESSAGE,
        Intent::WhatQuestion => WHAT_QUESTION,
        Intent::HowQuestion => HOW_QUESTION,
        Intent::WhyQuestion => WHY_QUESTION,
        Intent::CompanyMention => COMPANY_MENTION,
        Intent::TechnologyMention => TECHNOLOGY_MENTION,
        Intent::Fallback => FALLBACK,
    }
}

/// Dedicated knowledge text for a known company, overriding the generic
/// pool when that company is mentioned
pub fn company_knowledge(name: &str) -> Option<&'static str> {
    match name {
        "Яндекс" => Some(
            "Яндекс — одна из крупнейших IT-компаний рунета. Я работал там frontend-разработчиком; подробности в разделе \"Опыт работы\".",
        ),
        "Сбер" => Some(
            "Сбер — это не только банк, но и большая экосистема IT-продуктов. Пересекался с их стеком на совместных проектах.",
        ),
        "Ozon" => Some(
            "Ozon — маркетплейс с серьезной инженерной культурой. Мой опыт там описан в разделе \"Опыт работы\".",
        ),
        "VK" => Some(
            "VK — главная соцсеть рунета и целый зоопарк сервисов. С их API доводилось работать не раз.",
        ),
        "Google" => Some(
            "Google — ориентир по инженерным практикам. В их офисе не работал, но их open source использую каждый день.",
        ),
        _ => None,
    }
}

/// Dedicated knowledge text for a known technology
pub fn technology_knowledge(name: &str) -> Option<&'static str> {
    match name {
        "React" => Some(
            "React — основной фреймворк в моем стеке, уровень 5 из 5. Этот сайт тоже написан на нем.",
        ),
        "TypeScript" => Some(
            "TypeScript использую везде, где есть JavaScript. Типы экономят часы отладки.",
        ),
        "JavaScript" => Some(
            "JavaScript — мой первый язык и до сих пор основной. Уровень 5 из 5 в разделе \"Навыки\".",
        ),
        "Node.js" => Some(
            "Node.js закрывает у меня серверную часть: API, сборка, инструменты. Уровень 4 из 5.",
        ),
        "Rust" => Some(
            "Rust изучаю для системных задач — компилятор строгий, зато спится спокойнее.",
        ),
        "Docker" => Some(
            "Docker использую для локальной разработки и деплоя. Уровень 3 из 5, расту.",
        ),
        "CSS" => Some(
            "CSS/SCSS — уровень 5 из 5. Верстка этого сайта-мессенджера как раз моя.",
        ),
        _ => None,
    }
}
