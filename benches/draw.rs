use cardparty::core::GameRng;
use cardparty::deck::Pool;
use cardparty::{CardPack, GameConfig, PartyGame, RandomChooser};

use criterion::{black_box, criterion_group, criterion_main, Criterion};

pub fn draw_hand(c: &mut Criterion) {
    let pool = Pool::new(0..500u32);
    let mut rng = GameRng::new(1);

    c.bench_function("draw 10 of 500", |b| {
        b.iter(|| pool.draw(black_box(10), &mut rng))
    });
}

pub fn play_game(c: &mut Criterion) {
    let pack = CardPack::builtin().unwrap();

    c.bench_function("4 bots, 5 rounds", |b| {
        b.iter(|| {
            let config = GameConfig::new()
                .with_players(["a", "b", "c", "d"])
                .with_seed(black_box(3));
            let mut game = PartyGame::new(config, &pack).unwrap();
            let mut bot = RandomChooser::new(3);
            while game.is_terminal().is_none() {
                game.play_round(&mut bot).unwrap();
            }
        })
    });
}

criterion_group!(benches, draw_hand, play_game);
criterion_main!(benches);
