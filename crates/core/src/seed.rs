//! Built-in seed deck used when a session starts.

use crate::types::Card;

const SEED: [(&str, &str); 5] = [
    (
        "What does CPU stand for in computer architecture?",
        "Central Processing Unit. It is the main part of a computer responsible for executing instructions and performing calculations.",
    ),
    (
        "What is the time complexity of binary search in a sorted array?",
        "O(log n). Binary search works by dividing the search interval in half repeatedly, making it much faster than linear search for large datasets.",
    ),
    (
        "Which data structure follows the Last In, First Out (LIFO) principle?",
        "Stack. In a stack, the last element added is the first one to be removed, similar to stacking plates where the top plate is removed first.",
    ),
    (
        "In object-oriented programming, what is inheritance?",
        "Inheritance lets a class (child class) take on the properties and methods of another class (parent class), promoting code reuse and hierarchy.",
    ),
    (
        "What is the primary purpose of DNS (Domain Name System)?",
        "DNS translates human-readable domain names (like www.example.com) into IP addresses (like 192.0.2.1) so computers can locate websites on the internet.",
    ),
];

/// The built-in deck, in stack order (index 0 on top).
pub fn seed_deck() -> Vec<Card> {
    SEED.iter().map(|&(q, a)| Card::new(q, a)).collect()
}
