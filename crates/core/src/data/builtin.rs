//! Hardcoded content used when data files are unavailable.

use indexmap::IndexMap;
use rust_decimal::Decimal;

use crate::domain::faq::{FaqBook, FaqEntry};
use crate::domain::product::{Product, ProductCatalog};
use crate::domain::social::SocialTemplate;

pub fn faq_book() -> FaqBook {
    let entries = [
        (
            "shipping",
            &["shipping", "delivery", "deliver", "ship"][..],
            "shipping",
            "Standard shipping takes 3-5 business days. Express shipping (1-2 business days) \
             is available at checkout. Orders over $50 ship free.",
        ),
        (
            "returns",
            &["return", "exchange", "send back"][..],
            "returns",
            "You can return any unused item within 30 days of delivery for a full refund. \
             Start a return from your account's Orders page to print a prepaid label.",
        ),
        (
            "payment",
            &["payment", "pay ", "credit card", "paypal", "apple pay"][..],
            "payment",
            "We accept Visa, Mastercard, American Express, PayPal and Apple Pay. \
             All payments are processed securely.",
        ),
        (
            "tracking",
            &["track", "where is my order", "order status"][..],
            "order tracking",
            "Use the tracking link in your shipping confirmation email, or open \
             Orders > Track Package in your account.",
        ),
        (
            "warranty",
            &["warranty", "guarantee"][..],
            "warranty",
            "All products include a 1-year manufacturer warranty. Electronics can be \
             extended to 3 years with our protection plan.",
        ),
    ];

    FaqBook::new(
        entries
            .into_iter()
            .map(|(id, keywords, category, answer)| {
                (
                    id.to_string(),
                    FaqEntry {
                        keywords: keywords.iter().map(|keyword| keyword.to_string()).collect(),
                        category: Some(category.to_string()),
                        answer: answer.to_string(),
                    },
                )
            })
            .collect(),
    )
}

fn product(name: &str, cents: i64, rating: f32, features: &[&str]) -> Product {
    Product {
        name: name.to_string(),
        price: Decimal::new(cents, 2),
        rating,
        features: features.iter().map(|feature| feature.to_string()).collect(),
        category: String::new(),
    }
}

pub fn product_catalog() -> ProductCatalog {
    let mut categories = IndexMap::new();
    categories.insert(
        "electronics".to_string(),
        vec![
            product("Wireless Earbuds Pro", 12999, 4.6, &["Noise cancelling", "24h battery"]),
            product(
                "Smart Watch X2",
                24999,
                4.4,
                &["Heart-rate monitor", "GPS", "Water resistant"],
            ),
            product("Portable Charger 10K", 2999, 4.3, &["10,000 mAh", "USB-C fast charge"]),
            product("4K Streaming Stick", 4999, 4.5, &["4K HDR", "Voice remote"]),
        ],
    );
    categories.insert(
        "fashion".to_string(),
        vec![
            product("Classic Denim Jacket", 7999, 4.5, &["100% cotton", "Unisex fit"]),
            product("Leather Crossbody Bag", 14999, 4.7, &["Genuine leather", "Adjustable strap"]),
            product("Everyday Sneakers", 5999, 4.2, &["Breathable mesh", "Memory foam insole"]),
        ],
    );
    categories.insert(
        "home".to_string(),
        vec![
            product("Aroma Diffuser", 3499, 4.1, &["Ultrasonic", "7 LED colors"]),
            product("Robot Vacuum S1", 29999, 4.8, &["App control", "Auto recharge"]),
            product("Ceramic Cookware Set", 18999, 4.6, &["Non-toxic coating", "10 pieces"]),
        ],
    );
    ProductCatalog::new(categories)
}

fn post(id: u32, platform: &str, content: &str, post_type: &str) -> SocialTemplate {
    SocialTemplate {
        id: Some(id),
        platform: platform.to_string(),
        content: content.to_string(),
        post_type: post_type.to_string(),
    }
}

pub fn social_templates() -> IndexMap<String, Vec<SocialTemplate>> {
    let mut sets = IndexMap::new();
    sets.insert(
        "launch".to_string(),
        vec![
            post(
                1,
                "Instagram",
                "🚀 Exciting News! We're thrilled to announce our latest product launch! 🎉\n\n\
                 Check out what's new and be among the first to experience innovation! ✨\n\n\
                 #NewLaunch #Innovation #ProductLaunch #ExcitingNews",
                "Product Launch",
            ),
            post(
                2,
                "Twitter",
                "🎊 BIG ANNOUNCEMENT! 🎊\n\nOur newest product is here and it's game-changing! \
                 Get ready to be amazed.\n\n👉 Tap the link to explore\n\n\
                 #Launch #NewProduct #Innovation",
                "Product Launch",
            ),
            post(
                3,
                "Facebook",
                "🌟 Drumroll please... 🥁\n\nWe're beyond excited to introduce our latest creation! \
                 This is what you've been waiting for.\n\nClick below to discover more! ⬇️\n\n\
                 #ProductLaunch #NewRelease #Innovation",
                "Product Launch",
            ),
        ],
    );
    sets.insert(
        "engagement".to_string(),
        vec![
            post(
                1,
                "Instagram",
                "💬 We want to hear from YOU!\n\nWhat's your favorite feature of our products? \
                 Drop a comment below! 👇\n\n\
                 #Community #CustomerLove #Engagement #YourOpinionMatters",
                "Engagement",
            ),
            post(
                2,
                "Twitter",
                "🤔 Quick question for our amazing community:\n\nIf you could add ONE feature to \
                 our product, what would it be?\n\nReply with your ideas! 💡\n\n\
                 #CommunityFirst #Innovation #CustomerFeedback",
                "Engagement",
            ),
            post(
                3,
                "Facebook",
                "❤️ Show some love!\n\nTag a friend who needs to see this! Share your experience \
                 with our products in the comments.\n\nLet's build this community together! 🙌\n\n\
                 #Community #ShareTheLove #CustomerStories",
                "Engagement",
            ),
        ],
    );
    sets.insert(
        "promotion".to_string(),
        vec![
            post(
                1,
                "Instagram",
                "🔥 FLASH SALE ALERT! 🔥\n\nUp to 50% OFF on selected items! Don't miss out on \
                 these amazing deals!\n\n⏰ Limited time only!\n👉 Shop now!\n\n\
                 #Sale #Discount #LimitedOffer #ShopNow",
                "Sale Promotion",
            ),
            post(
                2,
                "Twitter",
                "💰 SPECIAL OFFER 💰\n\nGET 50% OFF TODAY ONLY!\n\nUse code: SAVE50\n\n\
                 ⚡ Hurry! Offer ends at midnight!\n\n#Sale #Discount #SpecialOffer #SaveMoney",
                "Sale Promotion",
            ),
            post(
                3,
                "Facebook",
                "🎁 EXCLUSIVE DEAL for our amazing community! 🎁\n\nEnjoy up to 50% OFF on your \
                 favorite products!\n\n✨ This weekend only!\n🛍️ Click below to start shopping!\n\n\
                 #WeekendSale #SpecialDiscount #ShopNow",
                "Sale Promotion",
            ),
        ],
    );
    sets.insert(
        "general".to_string(),
        vec![
            post(
                1,
                "Multi-Platform",
                "✨ Thank you for being part of our journey!\n\nYour support means everything to \
                 us. 💙\n\n#ThankYou #Community #CustomerAppreciation",
                "Appreciation",
            ),
            post(
                2,
                "Multi-Platform",
                "🌟 Behind the scenes glimpse!\n\nHere's what goes into making your favorite \
                 products. We love what we do! ❤️\n\n#BehindTheScenes #OurStory #Passion",
                "Behind The Scenes",
            ),
            post(
                3,
                "Multi-Platform",
                "💡 Pro Tip!\n\nDid you know you can get more out of your product with this simple \
                 trick? Check it out!\n\n#ProTip #Tutorial #HowTo",
                "Educational",
            ),
        ],
    );
    sets
}
