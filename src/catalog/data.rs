//! Built-in catalog data.
//!
//! Every listing the app shows is derived from these collections; they are
//! constructed once per [`Catalog`](super::Catalog) and never mutated. An
//! external TOML file can replace them entirely (see [`super::loader`]).

use chrono::{TimeZone, Utc};

use super::types::{Category, Episode, PlatformLinks, Podcast};

fn s(v: &str) -> String {
    v.to_string()
}

fn ids(v: &[&str]) -> Vec<String> {
    v.iter().map(|i| i.to_string()).collect()
}

pub(super) fn categories() -> Vec<Category> {
    vec![
        Category {
            id: s("technology"),
            name: s("Technology"),
            description: s("Podcasts about software, hardware, AI, and the future of tech"),
            icon: s("/icons/icons8-technology-48.png"),
            cover_image: s("/categories/019_Why_Is_Technology_Important_-_The_Techs_Storm.png"),
            featured_podcasts: ids(&["syntax", "changelog", "darknetdiaries"]),
        },
        Category {
            id: s("science"),
            name: s("Science"),
            description: s("Podcasts about discoveries, research, and scientific developments"),
            icon: s("/icons/icons8-experiment-64.png"),
            cover_image: s("/categories/017_Faculty_of_Science_-_University_of_Johannesburg.jpg"),
            featured_podcasts: ids(&["ologies", "radiolab", "sciencevs"]),
        },
        Category {
            id: s("gaming"),
            name: s("Gaming"),
            description: s(
                "Podcasts about video games, esports, game development, and gaming culture",
            ),
            icon: s("/icons/icons8-nintendo-gamecube-64.png"),
            cover_image: s("/categories/018_The_Reason_Why_Gaming_Is_Growing_As_a_Favourite_Pa.jpg"),
            featured_podcasts: ids(&["triple-click", "spawn-on-me", "checkpoint"]),
        },
        Category {
            id: s("music"),
            name: s("Music"),
            description: s("Podcasts about music production, artist interviews, and music history"),
            icon: s("/icons/music.svg"),
            cover_image: s("/categories/music.jpg"),
            featured_podcasts: ids(&["switchedonpop", "songexploder", "dissect"]),
        },
        Category {
            id: s("art-design"),
            name: s("Art & Design"),
            description: s("Podcasts about creative processes, design thinking, and visual arts"),
            icon: s("/icons/icons8-art-48.png"),
            cover_image: s("/categories/art-design.png"),
            featured_podcasts: ids(&["designmatters", "99pi", "creative-pep-talk"]),
        },
        Category {
            id: s("cooking"),
            name: s("Cooking & Food"),
            description: s(
                "Podcasts about culinary arts, recipes, food history, and food culture",
            ),
            icon: s("/icons/cooking.png"),
            cover_image: s("/categories/cooking.jpg"),
            featured_podcasts: ids(&["splendid-table", "food52", "milk-street"]),
        },
        Category {
            id: s("fitness"),
            name: s("Fitness & Health"),
            description: s(
                "Podcasts about exercise, nutrition, wellness, and athletic performance",
            ),
            icon: s("/icons/fitness.svg"),
            cover_image: s("/categories/fitness.jpg"),
            featured_podcasts: ids(&["huberman-lab", "mind-pump", "rich-roll"]),
        },
        Category {
            id: s("photography"),
            name: s("Photography"),
            description: s("Podcasts about photography techniques, gear, and industry insights"),
            icon: s("/icons/photography.svg"),
            cover_image: s("/categories/photography.jpg"),
            featured_podcasts: ids(&["b-and-h", "petapixel", "candid"]),
        },
    ]
}

pub(super) fn podcasts() -> Vec<Podcast> {
    vec![
        Podcast {
            id: s("syntax"),
            title: s("Syntax - Tasty Web Development Treats"),
            creator: s("Wes Bos & Scott Tolinski"),
            description: s(
                "A podcast for web developers interested in building great websites, apps, \
                 and staying up to date with the latest trends.",
            ),
            cover_image: s("/podcasts/syntax.jpg"),
            categories: ids(&["technology"]),
            featured: true,
            rating: Some(4.8),
            listen_count: Some(582_000),
            links: Some(PlatformLinks {
                spotify: Some(s("https://open.spotify.com/show/4kYCRYJ3yK5DQbP5tbfZby")),
                apple: Some(s(
                    "https://podcasts.apple.com/us/podcast/syntax-tasty-web-development-treats/id1253186678",
                )),
                ..PlatformLinks::default()
            }),
            ..Podcast::default()
        },
        Podcast {
            id: s("changelog"),
            title: s("The Changelog"),
            creator: s("Changelog Media"),
            description: s(
                "News and podcasts for developers featuring conversations about software \
                 development, open source, careers, and more.",
            ),
            cover_image: s("/podcasts/changelog.jpg"),
            categories: ids(&["technology"]),
            rating: Some(4.7),
            links: Some(PlatformLinks {
                spotify: Some(s("https://open.spotify.com/show/5bBki72YeKSLUqyD94qsuJ")),
                apple: Some(s(
                    "https://podcasts.apple.com/us/podcast/the-changelog/id341623264",
                )),
                ..PlatformLinks::default()
            }),
            ..Podcast::default()
        },
        Podcast {
            id: s("darknetdiaries"),
            title: s("Darknet Diaries"),
            creator: s("Jack Rhysider"),
            description: s(
                "True stories from the dark side of the Internet exploring hacking, data \
                 breaches, and cybercrime.",
            ),
            cover_image: s("/podcasts/darknet-diaries.jpg"),
            categories: ids(&["technology"]),
            featured: true,
            rating: Some(4.9),
            listen_count: Some(890_000),
            links: Some(PlatformLinks {
                spotify: Some(s("https://open.spotify.com/show/4XPl3uEEL9hvqMkoZrzbx5")),
                apple: Some(s(
                    "https://podcasts.apple.com/us/podcast/darknet-diaries/id1296350485",
                )),
                ..PlatformLinks::default()
            }),
            ..Podcast::default()
        },
        Podcast {
            id: s("ologies"),
            title: s("Ologies"),
            creator: s("Alie Ward"),
            description: s(
                "A comedic science podcast where Ward interviews experts in various \
                 scientific fields ending with -ology.",
            ),
            cover_image: s("/podcasts/ologies.jpg"),
            categories: ids(&["science"]),
            featured: true,
            rating: Some(4.9),
            listen_count: Some(750_000),
            links: Some(PlatformLinks {
                spotify: Some(s("https://open.spotify.com/show/5nvRkVMH58SelKZYZFZx1S")),
                apple: Some(s(
                    "https://podcasts.apple.com/us/podcast/ologies-with-alie-ward/id1278815517",
                )),
                ..PlatformLinks::default()
            }),
            ..Podcast::default()
        },
        Podcast {
            id: s("radiolab"),
            title: s("Radiolab"),
            creator: s("WNYC Studios"),
            description: s(
                "An investigation told through sounds and stories, weaving science, \
                 philosophy, and human experience.",
            ),
            cover_image: s("/podcasts/radiolab.jpg"),
            categories: ids(&["science"]),
            rating: Some(4.8),
            listen_count: Some(1_250_000),
            links: Some(PlatformLinks {
                spotify: Some(s("https://open.spotify.com/show/2hmkzUtix0qTqOKtDdDpIQ")),
                apple: Some(s("https://podcasts.apple.com/us/podcast/radiolab/id152249110")),
                ..PlatformLinks::default()
            }),
            ..Podcast::default()
        },
        Podcast {
            id: s("sciencevs"),
            title: s("Science Vs"),
            creator: s("Gimlet Media"),
            description: s(
                "Takes on fads, trends, and the opinionated mob to find out what's fact, \
                 what's not, and what's somewhere in between.",
            ),
            cover_image: s("/podcasts/science-vs.jpg"),
            categories: ids(&["science"]),
            rating: Some(4.6),
            links: Some(PlatformLinks {
                spotify: Some(s("https://open.spotify.com/show/5lY4b5PGOvMuOYOjOVEcb9")),
                apple: Some(s(
                    "https://podcasts.apple.com/us/podcast/science-vs/id1051557000",
                )),
                ..PlatformLinks::default()
            }),
            ..Podcast::default()
        },
        Podcast {
            id: s("triple-click"),
            title: s("Triple Click"),
            creator: s("Maximum Fun"),
            description: s(
                "Three gaming experts share the latest news, experiences, and deep thoughts \
                 on video games and the culture around them.",
            ),
            cover_image: s("/podcasts/triple-click.jpg"),
            categories: ids(&["gaming"]),
            featured: true,
            rating: Some(4.7),
            listen_count: Some(320_000),
            links: Some(PlatformLinks {
                spotify: Some(s("https://open.spotify.com/show/68L8hAksNoNxl71KQmG73d")),
                apple: Some(s(
                    "https://podcasts.apple.com/us/podcast/triple-click/id1507834679",
                )),
                ..PlatformLinks::default()
            }),
            ..Podcast::default()
        },
        Podcast {
            id: s("spawn-on-me"),
            title: s("Spawn On Me"),
            creator: s("Kahlief Adams"),
            description: s(
                "A podcast focusing on video games and culture, with a particular emphasis \
                 on people of color in the gaming community.",
            ),
            cover_image: s("/podcasts/spawn-on-me.jpg"),
            categories: ids(&["gaming"]),
            rating: Some(4.5),
            links: Some(PlatformLinks {
                spotify: Some(s("https://open.spotify.com/show/3KsVXPQlx9RCynRjQaR29Y")),
                apple: Some(s(
                    "https://podcasts.apple.com/us/podcast/spawn-on-me-with-kahlief-adams/id810062981",
                )),
                ..PlatformLinks::default()
            }),
            ..Podcast::default()
        },
        Podcast {
            id: s("checkpoint"),
            title: s("Checkpoint"),
            creator: s("ABC"),
            description: s(
                "Gaming, culture and industry insights from Australia's public broadcaster, \
                 exploring the impact of video games on our lives.",
            ),
            cover_image: s("/podcasts/checkpoint.jpg"),
            categories: ids(&["gaming"]),
            rating: Some(4.4),
            links: Some(PlatformLinks {
                spotify: Some(s("https://open.spotify.com/show/3NJqofGvZS4GiMJhPEYOSx")),
                apple: Some(s(
                    "https://podcasts.apple.com/au/podcast/checkpoint/id1038130956",
                )),
                ..PlatformLinks::default()
            }),
            ..Podcast::default()
        },
        Podcast {
            id: s("songexploder"),
            title: s("Song Exploder"),
            creator: s("Hrishikesh Hirway"),
            description: s(
                "Musicians take apart their songs, and piece by piece, tell the story of how \
                 they were made.",
            ),
            cover_image: s("/podcasts/song-exploder.jpg"),
            categories: ids(&["music"]),
            featured: true,
            rating: Some(4.9),
            listen_count: Some(680_000),
            links: Some(PlatformLinks {
                spotify: Some(s("https://open.spotify.com/show/10lMwGjvNLxzhOOOMRnnAC")),
                apple: Some(s(
                    "https://podcasts.apple.com/us/podcast/song-exploder/id788236947",
                )),
                ..PlatformLinks::default()
            }),
            ..Podcast::default()
        },
        Podcast {
            id: s("switchedonpop"),
            title: s("Switched on Pop"),
            creator: s("Vox Media"),
            description: s(
                "A podcast about the making and meaning of popular music, breaking down pop \
                 songs to figure out what makes them catchy.",
            ),
            cover_image: s("/podcasts/switched-on-pop.jpg"),
            categories: ids(&["music"]),
            rating: Some(4.6),
            links: Some(PlatformLinks {
                spotify: Some(s("https://open.spotify.com/show/1sgUbYVQ5rScS0XRMgw0ME")),
                apple: Some(s(
                    "https://podcasts.apple.com/us/podcast/switched-on-pop/id934552872",
                )),
                ..PlatformLinks::default()
            }),
            ..Podcast::default()
        },
        Podcast {
            id: s("dissect"),
            title: s("Dissect"),
            creator: s("Spotify Studios"),
            description: s(
                "A musical analysis podcast that examines an album, one song per episode, \
                 breaking down the music and lyrics.",
            ),
            cover_image: s("/podcasts/dissect.jpg"),
            categories: ids(&["music"]),
            rating: Some(4.8),
            listen_count: Some(550_000),
            links: Some(PlatformLinks {
                spotify: Some(s("https://open.spotify.com/show/2b025hq3gJ17tQdxS3aV43")),
                apple: Some(s(
                    "https://podcasts.apple.com/us/podcast/dissect/id1143845868",
                )),
                ..PlatformLinks::default()
            }),
            ..Podcast::default()
        },
    ]
}

pub(super) fn episodes() -> Vec<Episode> {
    vec![
        Episode {
            id: s("ep001"),
            title: s("Getting Started with Podcasting"),
            description: s(
                "Learn the basics of starting your own podcast with our comprehensive guide.",
            ),
            long_description: Some(s(
                "In this inaugural episode, we dive deep into the world of podcasting. From \
                 selecting the right equipment to developing your unique voice, we cover \
                 everything you need to know to launch a successful podcast. We discuss \
                 microphone options, recording software, hosting platforms, and strategies \
                 for growing your audience from day one.",
            )),
            cover_image: s("/episodes/ep001-cover.jpg"),
            audio_url: s("https://example.com/episodes/ep001.mp3"),
            duration: s("00:45:30"),
            publish_date: Utc.with_ymd_and_hms(2025, 1, 1, 8, 0, 0).unwrap(),
            hosts: ids(&["John Smith", "Jane Doe"]),
            guests: ids(&["Mike Johnson - Podcast Producer"]),
            tags: ids(&["Podcasting", "Beginners", "Equipment", "Growth"]),
            transcript: None,
            featured: true,
            season: Some(1),
            episode: Some(1),
        },
        Episode {
            id: s("ep002"),
            title: s("Building a Loyal Podcast Audience"),
            description: s(
                "Strategies and tactics for growing and maintaining your podcast listener base.",
            ),
            long_description: Some(s(
                "Building a loyal podcast audience takes more than just great content. In \
                 this episode, we explore proven strategies for audience growth, from social \
                 media promotion to cross-podcast collaboration. Learn how to leverage \
                 analytics to understand your listeners better and create content that keeps \
                 them coming back for more.",
            )),
            cover_image: s("/episodes/ep002-cover.jpg"),
            audio_url: s("https://example.com/episodes/ep002.mp3"),
            duration: s("00:38:45"),
            publish_date: Utc.with_ymd_and_hms(2025, 1, 8, 8, 0, 0).unwrap(),
            hosts: ids(&["John Smith", "Jane Doe"]),
            guests: ids(&["Sarah Williams - Marketing Expert"]),
            tags: ids(&["Marketing", "Growth", "Analytics", "Social Media"]),
            transcript: None,
            featured: false,
            season: Some(1),
            episode: Some(2),
        },
        Episode {
            id: s("ep003"),
            title: s("Monetizing Your Podcast"),
            description: s(
                "Explore different revenue streams for your podcast and how to implement them.",
            ),
            long_description: Some(s(
                "Ready to turn your podcast into a revenue-generating machine? In this \
                 episode, we break down various monetization methods, from sponsorships and \
                 advertising to premium content and merchandise. We discuss how to price \
                 your offerings, approach potential sponsors, and create additional value \
                 for your most dedicated listeners.",
            )),
            cover_image: s("/episodes/ep003-cover.jpg"),
            audio_url: s("https://example.com/episodes/ep003.mp3"),
            duration: s("00:52:15"),
            publish_date: Utc.with_ymd_and_hms(2025, 1, 15, 8, 0, 0).unwrap(),
            hosts: ids(&["John Smith", "Jane Doe"]),
            guests: ids(&["Alex Chen - Podcast Monetization Consultant"]),
            tags: ids(&["Monetization", "Sponsorships", "Business", "Premium Content"]),
            transcript: None,
            featured: true,
            season: Some(1),
            episode: Some(3),
        },
        Episode {
            id: s("ep004"),
            title: s("Advanced Audio Production Techniques"),
            description: s(
                "Take your podcast sound quality to the next level with these professional tips.",
            ),
            long_description: Some(s(
                "Good audio quality can make or break your podcast. In this technical deep \
                 dive, we explore advanced production techniques that will elevate your \
                 podcast's sound. From proper microphone techniques to EQ, compression, and \
                 noise reduction, you'll learn how to achieve that professional sound even \
                 on a modest budget.",
            )),
            cover_image: s("/episodes/ep004-cover.jpg"),
            audio_url: s("https://example.com/episodes/ep004.mp3"),
            duration: s("01:05:22"),
            publish_date: Utc.with_ymd_and_hms(2025, 1, 22, 8, 0, 0).unwrap(),
            hosts: ids(&["John Smith", "Jane Doe"]),
            guests: ids(&["David Lee - Audio Engineer"]),
            tags: ids(&["Audio", "Production", "Technical", "Equipment"]),
            transcript: None,
            featured: false,
            season: Some(1),
            episode: Some(4),
        },
        Episode {
            id: s("ep005"),
            title: s("The Future of Podcasting"),
            description: s(
                "Exploring emerging trends and technologies shaping the future of podcasts.",
            ),
            long_description: Some(s(
                "What does the future hold for podcasting? In this forward-looking episode, \
                 we discuss emerging technologies, platform changes, and audience trends \
                 that are reshaping the podcasting landscape. From AI-enhanced production to \
                 interactive episodes and the impact of video podcasting, we explore what \
                 creators need to know to stay ahead of the curve.",
            )),
            cover_image: s("/episodes/ep005-cover.jpg"),
            audio_url: s("https://example.com/episodes/ep005.mp3"),
            duration: s("00:48:36"),
            publish_date: Utc.with_ymd_and_hms(2025, 1, 29, 8, 0, 0).unwrap(),
            hosts: ids(&["John Smith", "Jane Doe"]),
            guests: ids(&["Emma Rodriguez - Media Futurist"]),
            tags: ids(&["Future", "Technology", "Trends", "Innovation"]),
            transcript: None,
            featured: true,
            season: Some(1),
            episode: Some(5),
        },
    ]
}
