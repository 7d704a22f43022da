/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

fn contains_word(input: &str, words: &[&str]) -> bool {
    input
        .split(|c: char| !c.is_ascii_alphanumeric())
        .any(|token| words.contains(&token))
}

fn contains_any(input: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| input.contains(needle))
}

/// Answers a chat message from a fixed set of marketplace topics. Matching is
/// case-insensitive and the first matching topic wins, so more specific
/// topics are checked before broader ones. Unrecognized messages get a
/// fallback answer that repeats the question.
pub fn respond_to_message(message: &str) -> String {
    let input = message.to_lowercase();

    if contains_word(&input, &["hello", "hi", "hey"]) {
        return "Hello! Welcome to AIMarket. I can help you with buying and selling AI \
                products, product verification, custom project requests, and your account. \
                What would you like to know?"
            .to_string();
    }

    if input.contains("how") && input.contains("sell") {
        return "To sell on AIMarket, create an account and publish a listing with a name, \
                description, category, and price. Every listing goes through our verification \
                process before it is shown to buyers."
            .to_string();
    }

    if input.contains("how") && contains_any(&input, &["buy", "purchase"]) {
        return "To buy an AI product, browse the marketplace or filter by category, open a \
                listing to review its details and verification status, then message the \
                seller to arrange the purchase."
            .to_string();
    }

    if input.contains("verif") {
        return "Every product listing is screened by our verification engine. It checks \
                pricing, description quality, and suspicious claims, then marks the listing \
                as approved or rejected together with explanatory notes and a risk score."
            .to_string();
    }

    if contains_any(&input, &["custom", "project"]) {
        return "If you need a custom AI solution, post a project request with your \
                requirements, budget range, and deadline. Sellers browse open requests and \
                reach out to you through the messaging system."
            .to_string();
    }

    if contains_any(&input, &["price", "fee", "cost"]) {
        return "Listing products on AIMarket is free. Sellers set their own prices and \
                payment terms are agreed between buyer and seller. There are currently no \
                platform fees."
            .to_string();
    }

    if contains_any(&input, &["message", "contact"]) {
        return "You can contact any seller through the messaging system. Open their product \
                page and send a message; replies show up in your conversations view with \
                unread counts."
            .to_string();
    }

    if contains_any(&input, &["account", "register", "login", "password", "sign up"]) {
        return "You can register with a username, email, and password. Once logged in you \
                can update your profile, manage your listings, and track your project \
                requests."
            .to_string();
    }

    format!(
        "I'm not sure how to help with \"{}\". I can answer questions about buying and \
         selling AI products, product verification, custom project requests, pricing, \
         messaging sellers, and account management.",
        message
    )
}
