use serenity_interactions::json::json;
use serenity_interactions::marshal::Marshal;
use serenity_interactions::model::application::{InteractionResponse, ResponseMessage};
use serenity_interactions::model::channel::{Embed, EmbedField};

#[test]
fn test_from_embed() {
    let mut embed = Embed::rich()
        .title("hakase")
        .description("This is a test description")
        .field("a", "b", false)
        .field("c", "z", true);
    embed.colour = Some(0xFF0011);
    embed.url = Some("https://i.imgur.com/XfWpfCV.gif".to_owned());

    let built = embed.encode();

    let obj = json!({
        "type": "rich",
        "title": "hakase",
        "description": "This is a test description",
        "url": "https://i.imgur.com/XfWpfCV.gif",
        "color": 0xFF0011,
        "fields": [
            {"name": "a", "value": "b", "inline": false},
            {"name": "c", "value": "z", "inline": true},
        ],
    });

    assert_eq!(built, obj);
    assert_eq!(Embed::decode(&obj).unwrap(), embed);
    assert_eq!(embed.fields[1], EmbedField::new("c", "z", true));
}

#[test]
fn test_embed_in_response() {
    let response = InteractionResponse::message(
        ResponseMessage::default().embed(Embed::rich().title("still a hakase")),
    );

    let value = response.encode();

    assert_eq!(value["type"], 4);
    assert_eq!(value["data"]["embeds"][0]["title"], "still a hakase");
    assert!(value["data"].get("content").is_none());
}
