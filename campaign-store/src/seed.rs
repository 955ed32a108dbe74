//! Built-in seed content
//!
//! Written to storage the first time the store boots, and consulted by the
//! legacy backfill to restore fields that older snapshots lack.

use shared::models::{
    Activity, BeanTransaction, Currency, GlobalData, Interaction, Product, ProductType, Theme,
    VoteOption,
};
use shared::util::{display_time, iso_now, record_id};

use crate::rewards::{FIRST_LOGIN_BEANS, FIRST_LOGIN_SOURCE};

/// Id of the activity shipped with the first release
pub const SEED_ACTIVITY_ID: &str = "spring_equinox_2024";

/// Title the first release used before the rename
pub const LEGACY_SEED_NAME: &str = "春分·竖蛋";

pub const SEED_ACTIVITY_NAME: &str = "春分到，蛋儿俏";
pub const SEED_ACTIVITY_SUBTITLE: &str = "春色正中分，美好正当时";

const IMAGE_BASE: &str = "https://coresg-normal.trae.ai/api/ide/v1/text_to_image";

fn image(prompt: &str, size: &str) -> String {
    format!("{}?prompt={}&image_size={}", IMAGE_BASE, prompt, size)
}

struct SeedItem {
    id: &'static str,
    name: &'static str,
    subtitle: Option<&'static str>,
    description: &'static str,
    price: f64,
    prompt: &'static str,
}

fn build(kind: ProductType, items: &[SeedItem], size: &str, created_at: &str) -> Vec<Product> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| Product {
            id: item.id.into(),
            kind,
            name: item.name.into(),
            subtitle: item.subtitle.map(Into::into),
            description: item.description.into(),
            images: vec![image(item.prompt, size)],
            price: item.price,
            currency: Currency::Cny,
            stock: None,
            tags: None,
            display_order: i as i32 + 1,
            is_active: true,
            created_at: created_at.to_string(),
        })
        .collect()
}

const FOODS: &[SeedItem] = &[
    SeedItem {
        id: "f1",
        name: "鲜嫩春笋",
        subtitle: Some("山野之鲜"),
        description: "春日限定美味",
        price: 28.8,
        prompt: "fresh%20spring%20bamboo%20shoots%20high%20quality%20photography",
    },
    SeedItem {
        id: "f2",
        name: "红油香椿",
        subtitle: Some("时令野菜"),
        description: "一口春天的味道",
        price: 38.8,
        prompt: "fresh%20chinese%20toon%20sprouts%20vegetable%20photography",
    },
    SeedItem {
        id: "f3",
        name: "野生荠菜",
        subtitle: Some("鲜香可口"),
        description: "鲜美包饺子",
        price: 18.8,
        prompt: "fresh%20shepherd%27s%20purse%20green%20vegetable%20basket",
    },
];

const PRODUCTS: &[SeedItem] = &[
    SeedItem {
        id: "p1",
        name: "智能煮蛋器",
        subtitle: Some("自动断电"),
        description: "精准控温",
        price: 59.9,
        prompt: "modern%20white%20egg%20cooker%20appliance%20minimalist",
    },
    SeedItem {
        id: "p2",
        name: "春日野餐垫",
        subtitle: Some("加厚防潮"),
        description: "防水加厚",
        price: 89.9,
        prompt: "picnic%20mat%20on%20green%20grass%20spring%20outdoor",
    },
    SeedItem {
        id: "p3",
        name: "陶瓷蛋托",
        subtitle: Some("可爱造型"),
        description: "创意收纳",
        price: 29.9,
        prompt: "ceramic%20egg%20holder%20tray%20cute%20design",
    },
];

const SPOTS: &[(SeedItem, &str)] = &[
    (
        SeedItem {
            id: "s1",
            name: "苏州赏花指南",
            subtitle: None,
            description: "十里桃花映春风",
            price: 0.0,
            prompt: "suzhou%20garden%20cherry%20blossom%20spring%20scenery",
        },
        "热门",
    ),
    (
        SeedItem {
            id: "s2",
            name: "非遗立蛋体验",
            subtitle: None,
            description: "亲子互动好去处",
            price: 0.0,
            prompt: "children%20playing%20egg%20balancing%20game%20happy%20spring",
        },
        "推荐",
    ),
    (
        SeedItem {
            id: "s3",
            name: "阳澄湖踏青",
            subtitle: None,
            description: "湖光春色两相宜",
            price: 0.0,
            prompt: "yangcheng%20lake%20spring%20scenery%20green%20grass%20blue%20water",
        },
        "新品",
    ),
];

/// (id, name, description, price, stock, prompt)
const SHOP: &[(&str, &str, &str, u64, u32, &str)] = &[
    (
        "sp1",
        "春分限定帆布袋",
        "限量版",
        500,
        20,
        "canvas%20tote%20bag%20with%20spring%20equinox%20illustration%20minimalist%20mockup",
    ),
    (
        "sp2",
        "非遗手工风筝",
        "传统工艺",
        800,
        5,
        "traditional%20chinese%20kite%20swallow%20design%20colorful%20handcrafted",
    ),
    (
        "sp3",
        "有机绿茶礼盒",
        "明前龙井",
        1200,
        10,
        "premium%20green%20tea%20gift%20box%20elegant%20packaging%20spring%20tea",
    ),
    (
        "sp4",
        "立蛋挑战纪念章",
        "金属徽章",
        300,
        50,
        "metal%20badge%20pin%20egg%20balancing%20design%20gold%20finish",
    ),
];

/// (id, name, votes, prompt, color)
const VOTES: &[(&str, &str, u64, &str, &str)] = &[
    (
        "1",
        "水煮蛋",
        2341,
        "delicious%20boiled%20egg%20cut%20in%20half%20watercolor%20illustration%20minimalist%20white%20background",
        "from-orange-100 to-yellow-100",
    ),
    (
        "2",
        "溏心蛋",
        1892,
        "sunny%20side%20up%20fried%20egg%20watercolor%20illustration%20appetizing%20white%20background",
        "from-yellow-100 to-orange-100",
    ),
    (
        "3",
        "鸡蛋灌饼",
        1567,
        "chinese%20egg%20pancake%20jianbing%20watercolor%20illustration%20street%20food%20white%20background",
        "from-amber-100 to-orange-100",
    ),
    (
        "4",
        "酱香鸡蛋",
        1023,
        "soy%20sauce%20marinated%20egg%20watercolor%20illustration%20rich%20color%20white%20background",
        "from-red-100 to-orange-100",
    ),
    (
        "5",
        "我来推荐",
        876,
        "chinese%20writing%20brush%20and%20ink%20stone%20watercolor%20illustration%20minimalist%20white%20background",
        "from-green-100 to-emerald-100",
    ),
];

pub fn foods() -> Vec<Product> {
    build(ProductType::Food, FOODS, "square", &iso_now())
}

pub fn products() -> Vec<Product> {
    build(ProductType::Merchandise, PRODUCTS, "square", &iso_now())
}

pub fn spots() -> Vec<Product> {
    let created_at = iso_now();
    SPOTS
        .iter()
        .enumerate()
        .map(|(i, (item, tag))| {
            let mut spot = build(
                ProductType::Spot,
                std::slice::from_ref(item),
                "landscape_16_9",
                &created_at,
            )
            .remove(0);
            spot.display_order = i as i32 + 1;
            spot.tags = Some(vec![tag.to_string()]);
            spot
        })
        .collect()
}

pub fn shop_products() -> Vec<Product> {
    let created_at = iso_now();
    SHOP.iter()
        .enumerate()
        .map(|(i, (id, name, description, price, stock, prompt))| {
            let mut item = Product::shop_item(*id, *name, *price, *stock, i as i32 + 1, &created_at);
            item.description = description.to_string();
            item.images = vec![image(prompt, "square")];
            item
        })
        .collect()
}

pub fn vote_options() -> Vec<VoteOption> {
    VOTES
        .iter()
        .map(|(id, name, votes, prompt, color)| VoteOption {
            id: id.to_string(),
            name: name.to_string(),
            image_url: image(prompt, "square"),
            votes: *votes,
            color: Some(color.to_string()),
        })
        .collect()
}

/// Subtitle of the built-in food with this id
pub fn food_subtitle(id: &str) -> Option<&'static str> {
    FOODS.iter().find(|f| f.id == id).and_then(|f| f.subtitle)
}

/// Subtitle of the built-in recommended product with this id
pub fn product_subtitle(id: &str) -> Option<&'static str> {
    PRODUCTS.iter().find(|p| p.id == id).and_then(|p| p.subtitle)
}

pub fn activity() -> Activity {
    Activity {
        id: SEED_ACTIVITY_ID.into(),
        name: SEED_ACTIVITY_NAME.into(),
        subtitle: Some(SEED_ACTIVITY_SUBTITLE.into()),
        term_type: "chunfen".into(),
        start_time: "2024-03-20".into(),
        end_time: "2024-03-22".into(),
        theme: Theme::Ink,
        interaction: Interaction::Vote {
            vote_options: vote_options(),
        },
        recommended_foods: foods(),
        recommended_products: products(),
        recommended_spots: spots(),
        is_active: true,
    }
}

pub fn global_data() -> GlobalData {
    GlobalData {
        shop_products: shop_products(),
        user_beans: FIRST_LOGIN_BEANS,
        transactions: vec![BeanTransaction::income(
            record_id(),
            FIRST_LOGIN_BEANS,
            FIRST_LOGIN_SOURCE,
            display_time(),
        )],
        orders: Vec::new(),
    }
}
