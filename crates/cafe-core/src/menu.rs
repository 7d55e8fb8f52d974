//! Fixed menu catalog and waiter roster.
//!
//! Both tables are loaded once at service construction and never mutated.

use crate::types::{Category, MenuItem, Waiter};

/// The 20-item BrewBytes catalog, in fixed display order.
pub fn default_menu() -> Vec<MenuItem> {
    use Category::{Coffee, Dessert, Food};

    vec![
        MenuItem::new(1, "Espresso", 4, Coffee, "https://images.unsplash.com/photo-1606310553997-7a01e22900ae?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxlc3ByZXNzbyUyMGNvZmZlZSUyMGN1cHxlbnwxfHx8fDE3NjIxMjczOTh8MA&ixlib=rb-4.1.0&q=80&w=1080"),
        MenuItem::new(2, "Latte", 6, Coffee, "https://images.unsplash.com/photo-1680489809506-d8def0e1631f?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxsYXR0ZSUyMGNvZmZlZSUyMGFydHxlbnwxfHx8fDE3NjIxMzg2MTV8MA&ixlib=rb-4.1.0&q=80&w=1080"),
        MenuItem::new(3, "Cappuccino", 7, Coffee, "https://images.unsplash.com/photo-1708430651927-20e2e1f1e8f7?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxjYXBwdWNjaW5vJTIwY29mZmVlfGVufDF8fHx8MTc2MjEzMzE3Mnww&ixlib=rb-4.1.0&q=80&w=1080"),
        MenuItem::new(4, "Americano", 5, Coffee, "https://images.unsplash.com/photo-1669872484166-e11b9638b50e?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxhbWVyaWNhbm8lMjBjb2ZmZWV8ZW58MXx8fHwxNzYyMTI1NTkxfDA&ixlib=rb-4.1.0&q=80&w=1080"),
        MenuItem::new(5, "Mocha", 8, Coffee, "https://images.unsplash.com/photo-1618576230663-9714aecfb99a?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxtb2NoYSUyMGNvZmZlZXxlbnwxfHx8fDE3NjIxODI0MzF8MA&ixlib=rb-4.1.0&q=80&w=1080"),
        MenuItem::new(6, "Macchiato", 5, Coffee, "https://images.unsplash.com/photo-1604298458655-ae6e04213678?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxtYWNjaGlhdG8lMjBjb2ZmZWV8ZW58MXx8fHwxNzYyMTMzMTc0fDA&ixlib=rb-4.1.0&q=80&w=1080"),
        MenuItem::new(7, "Iced Coffee", 6, Coffee, "https://images.unsplash.com/photo-1684439670717-b1147a7e7534?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxpY2VkJTIwY29mZmVlJTIwZHJpbmt8ZW58MXx8fHwxNzYyMTAzOTM2fDA&ixlib=rb-4.1.0&q=80&w=1080"),
        MenuItem::new(8, "Cold Brew", 9, Coffee, "https://images.unsplash.com/photo-1561641377-f7456d23aa9b?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxjb2xkJTIwYnJldyUyMGNvZmZlZXxlbnwxfHx8fDE3NjIxNTIzMTB8MA&ixlib=rb-4.1.0&q=80&w=1080"),
        MenuItem::new(9, "Sandwich", 10, Food, "https://images.unsplash.com/photo-1673534409216-91c3175b9b2d?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxzYW5kd2ljaCUyMGZvb2R8ZW58MXx8fHwxNzYyMTcxNjQ3fDA&ixlib=rb-4.1.0&q=80&w=1080"),
        MenuItem::new(10, "Burger", 12, Food, "https://images.unsplash.com/photo-1688246780164-00c01647e78c?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxidXJnZXIlMjBmb29kfGVufDF8fHx8MTc2MjA3MTMzNnww&ixlib=rb-4.1.0&q=80&w=1080"),
        MenuItem::new(11, "Pizza Slice", 11, Food, "https://images.unsplash.com/photo-1544982503-9f984c14501a?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxwaXp6YSUyMHNsaWNlfGVufDF8fHx8MTc2MjA5MTQwM3ww&ixlib=rb-4.1.0&q=80&w=1080"),
        MenuItem::new(12, "Pasta", 13, Food, "https://images.unsplash.com/photo-1621996346565-e3dbc646d9a9?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxwYXN0YSUyMGRpc2h8ZW58MXx8fHwxNzYyMTA5NjIzfDA&ixlib=rb-4.1.0&q=80&w=1080"),
        MenuItem::new(13, "Salad", 7, Food, "https://images.unsplash.com/photo-1677653805080-59c57727c84e?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxmcmVzaCUyMHNhbGFkfGVufDF8fHx8MTc2MjE1MDA0M3ww&ixlib=rb-4.1.0&q=80&w=1080"),
        MenuItem::new(14, "Fries", 6, Food, "https://images.unsplash.com/photo-1630431341973-02e1b662ec35?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxmcmVuY2glMjBmcmllc3xlbnwxfHx8fDE3NjIxMDQxMjV8MA&ixlib=rb-4.1.0&q=80&w=1080"),
        MenuItem::new(15, "Taco", 9, Food, "https://images.unsplash.com/photo-1529704640551-eef9ba5d774a?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHx0YWNvJTIwZm9vZHxlbnwxfHx8fDE3NjIxODY4Njd8MA&ixlib=rb-4.1.0&q=80&w=1080"),
        MenuItem::new(16, "Wrap", 8, Food, "https://images.unsplash.com/photo-1705131187470-9458824c0d79?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHx3cmFwJTIwc2FuZHdpY2h8ZW58MXx8fHwxNzYyMTgyNDM4fDA&ixlib=rb-4.1.0&q=80&w=1080"),
        MenuItem::new(17, "Cake Slice", 5, Dessert, "https://images.unsplash.com/photo-1650147880857-95b822f65ff9?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxjYWtlJTIwc2xpY2UlMjBkZXNzZXJ0fGVufDF8fHx8MTc2MjExMDU1OXww&ixlib=rb-4.1.0&q=80&w=1080"),
        MenuItem::new(18, "Cookie", 3, Dessert, "https://images.unsplash.com/photo-1642774692082-b876a1f3bda9?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxjb29raWUlMjBkZXNzZXJ0fGVufDF8fHx8MTc2MjEwMTgxN3ww&ixlib=rb-4.1.0&q=80&w=1080"),
        MenuItem::new(19, "Muffin", 4, Dessert, "https://images.unsplash.com/photo-1612973835597-99b4e2558b07?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxtdWZmaW4lMjBwYXN0cnl8ZW58MXx8fHwxNzYyMTg2ODY4fDA&ixlib=rb-4.1.0&q=80&w=1080"),
        MenuItem::new(20, "Smoothie", 7, Dessert, "https://images.unsplash.com/photo-1655992590262-aeadeef445b1?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxzbW9vdGhpZSUyMGRyaW5rfGVufDF8fHx8MTc2MjE3NzM1N3ww&ixlib=rb-4.1.0&q=80&w=1080"),
    ]
}

/// The fixed 5-waiter roster, in registration order.
pub fn default_roster() -> Vec<Waiter> {
    vec![
        Waiter::new("Amit"),
        Waiter::new("Riya"),
        Waiter::new("Karan"),
        Waiter::new("Priya"),
        Waiter::new("Sam"),
    ]
}
