//! Fixed sample data loaded at startup.
//!
//! The demo client has no backend; this module is the static seed that
//! stands in for one. Five users, twelve posts. Timestamps are staggered
//! backwards from now so the feed order is deterministic on every launch.

use crate::domain::models::{Comment, Post, User};
use crate::store::PostStore;
use chrono::{Duration, Utc};
use uuid::Uuid;

fn sample_user(
    username: &str,
    display_name: &str,
    email: &str,
    bio: &str,
    image_name: &str,
) -> User {
    let mut user = User::new(username, display_name, email);
    user.bio = Some(bio.to_string());
    user.profile_image_name = Some(image_name.to_string());
    user
}

/// The fixed set of demo profiles.
pub fn sample_users() -> Vec<User> {
    vec![
        sample_user(
            "maksat_pilot",
            "Максат Пилот ✈️",
            "maksat.pilot@mail.ru",
            "Пилот самолета. Рассказываю о ежедневной работе в авиации! 🛩️",
            "maks",
        ),
        sample_user(
            "moris_ceo",
            "Морис CEO 🚀",
            "moris@jobescape.com",
            "CEO и сооснователь JobEscape - платформы для инвестиций в акции! 📈",
            "moris",
        ),
        sample_user(
            "margo_cto",
            "Марго CTO 💻",
            "margo@jobescape.com",
            "CTO JobEscape. Помогаем людям инвестировать и изучать фондовый рынок! 🌟",
            "margo",
        ),
        sample_user(
            "nariman_boxer",
            "Нариман Боксер 🥊",
            "nariman.boxer@gmail.com",
            "Профессиональный боксер. Тренируюсь каждый день! 💪",
            "narik",
        ),
        sample_user(
            "anuar_railways",
            "Ануар Железные дороги 🚂",
            "anuar@railways.uz",
            "Создаю систему оптимизации эффективности использования железных дорог в разных странах! 🚄",
            "anuar",
        ),
    ]
}

fn seeded_post(
    author: &User,
    content: &str,
    likes: usize,
    comments: &[(&User, &str)],
    age_minutes: i64,
) -> Post {
    let mut post = Post::new(author, content);
    post.timestamp = Utc::now() - Duration::minutes(age_minutes);
    // Seeded like counts are realized as anonymous liker ids so that
    // likes == liked_by.len() holds for every stored post from the first
    // read onwards.
    post.liked_by = (0..likes).map(|_| Uuid::new_v4()).collect();
    post.likes = likes;
    for (i, (commenter, text)) in comments.iter().enumerate() {
        let mut comment = Comment::new(commenter, *text);
        comment.timestamp = post.timestamp + Duration::minutes(i as i64 + 1);
        post.comments.push(comment);
    }
    post
}

/// The fixed set of demo posts, newest first.
///
/// `users` must be the slice returned by [`sample_users`].
pub fn sample_posts(users: &[User]) -> Vec<Post> {
    let maksat = &users[0];
    let moris = &users[1];
    let margo = &users[2];
    let nariman = &users[3];
    let anuar = &users[4];

    vec![
        seeded_post(
            maksat,
            "Сегодня летел из Алматы в Астану. Погода отличная, вид сверху просто невероятный! ✈️ Каждый раз поражаюсь красоте нашей страны с высоты птичьего полета! 🛩️ #Пилот #Авиация #Казахстан",
            45,
            &[
                (moris, "Круто! А какой самолет пилотируешь? 🚀"),
                (margo, "Завидую! Мечтаю полетать с тобой! ✈️"),
            ],
            5,
        ),
        seeded_post(
            moris,
            "JobEscape растет! 🚀 Запустили новую функцию анализа акций. Теперь инвесторы могут принимать более обоснованные решения! 📈 Кто-нибудь уже попробовал? #JobEscape #Инвестиции #Акции",
            32,
            &[
                (nariman, "Отличная идея! Попробую обязательно! 🎉"),
                (anuar, "Молодцы! Развиваете инвестиционную культуру! 💪"),
            ],
            12,
        ),
        seeded_post(
            margo,
            "Работаем над новой архитектурой JobEscape! 💻 Сложно, но очень интересно. Каждый день изучаю что-то новое в области финансовых алгоритмов! 🌟 #CTO #Разработка #JobEscape",
            28,
            &[(maksat, "Удачи с архитектурой! Сложная задача! ✨")],
            27,
        ),
        seeded_post(
            maksat,
            "Вчера был сложный полет в Шымкент. Сильный ветер, но справился! 💪 Опыт - это самое ценное в нашей профессии. Каждый полет учит чему-то новому! 🛩️ #Пилот #Опыт #Авиация",
            67,
            &[
                (moris, "Респект! Безопасность превыше всего! 💯"),
                (nariman, "Горжусь тобой, брат! 📚"),
                (anuar, "Настоящий профессионал! 🌟"),
            ],
            43,
        ),
        seeded_post(
            nariman,
            "Подготовка к чемпионату идет полным ходом! 🥊 Каждый день тренировки, диета, режим. Цель - золото! 💪 Кто поддерживает? #Бокс #Чемпионат #Тренировки",
            41,
            &[
                (margo, "Удачи на чемпионате! Ты справишься! 📱"),
                (moris, "Болеем за тебя! 💪"),
            ],
            68,
        ),
        seeded_post(
            anuar,
            "Работаю над системой оптимизации эффективности железных дорог! 🚂 Создаю алгоритмы для улучшения использования инфраструктуры в разных странах! 🚄 #ЖелезныеДороги #Оптимизация #Эффективность",
            23,
            &[(maksat, "Интересный проект! Удачи! 🤝")],
            90,
        ),
        seeded_post(
            moris,
            "JobEscape теперь доступен в 5 городах Казахстана! 🚀 Алматы, Астана, Шымкент, Актобе, Атырау. Инвестиционное сообщество растет! 📈 #JobEscape #Инвестиции #Казахстан",
            19,
            &[],
            120,
        ),
        seeded_post(
            maksat,
            "Сегодня был первый полет с новым курсантом. Передаю опыт молодому поколению пилотов! ✈️ Важно делиться знаниями в авиации! 🛩️ #Пилот #Обучение #Авиация",
            38,
            &[
                (nariman, "Отличный наставник! 👨‍✈️"),
                (margo, "Передаешь опыт - это круто! ✈️"),
            ],
            150,
        ),
        seeded_post(
            margo,
            "Изучаю новые технологии для JobEscape! 💻 Machine Learning для анализа рынка акций - это будущее! Очень увлекательно! 🌟 #ML #ИИ #JobEscape",
            25,
            &[(anuar, "Инновационный подход! Удачи! ✨")],
            185,
        ),
        seeded_post(
            nariman,
            "Победа в полуфинале! 🥊 Следующий бой - финал чемпионата! Все ближе к мечте! 💪 Спасибо всем за поддержку! #Бокс #Победа #Финал",
            52,
            &[
                (moris, "Поздравляю с победой! 🎉"),
                (maksat, "Гордимся тобой! 💪"),
                (margo, "Вперед к золоту! 🥇"),
            ],
            220,
        ),
        seeded_post(
            anuar,
            "Разрабатываю алгоритмы для оптимизации расписания поездов! 🚄 Улучшаю эффективность использования железнодорожной инфраструктуры! 🌱 #Оптимизация #Алгоритмы #ЖелезныеДороги",
            21,
            &[],
            260,
        ),
        seeded_post(
            maksat,
            "Авиация - это не просто работа, это страсть! ✈️ Каждый взлет - это новые возможности, каждый полет - новые горизонты! 🛩️ #Страсть #Авиация #Мечта",
            44,
            &[
                (moris, "Вдохновляешь! 🚀"),
                (nariman, "Истинный пилот! ✈️"),
            ],
            300,
        ),
    ]
}

/// Seed a store with the sample posts and return the sample users.
pub fn seed(store: &PostStore) -> Vec<User> {
    let users = sample_users();
    for post in sample_posts(&users) {
        store.add(post);
    }
    users
}
