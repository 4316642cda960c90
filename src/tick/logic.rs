//! Tick-based game logic: phase control, buffered input, single-step advance.

use super::types::{spawn_food, Direction, TickGame, TickPhase, LEVEL_UP_FOOD, MIN_TICK_MS};
use crate::rules::{check_collision, CollisionCause};
use rand::Rng;

/// What a single step did, for the host to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// Not running; nothing happened.
    Skipped,
    /// Plain move, tail dropped.
    Moved,
    /// Ate food and grew.
    Ate { leveled_up: bool },
    /// The path now covers the whole board.
    Won,
    Collided(CollisionCause),
}

/// Start the game from `Idle`, or resume from `Paused`.
pub fn start(game: &mut TickGame) {
    if matches!(game.phase, TickPhase::Idle | TickPhase::Paused) {
        game.phase = TickPhase::Running;
    }
}

/// Toggle between `Running` and `Paused`. No effect in other phases.
pub fn toggle_pause(game: &mut TickGame) {
    game.phase = match game.phase {
        TickPhase::Running => TickPhase::Paused,
        TickPhase::Paused => TickPhase::Running,
        other => other,
    };
}

/// Buffer a direction change, applied at the next step. Returns false if the
/// change was rejected: a reversal of the current direction while the body is
/// longer than one segment, or any input after the game ended.
pub fn set_direction(game: &mut TickGame, dir: Direction) -> bool {
    if game.is_over() {
        return false;
    }
    if game.snake.len() > 1 && dir == game.direction.opposite() {
        return false;
    }
    game.next_direction = dir;
    true
}

/// Advance the game by exactly one step. Silent no-op unless `Running`; the
/// host calls this at whatever cadence it likes (a timer, a test loop).
pub fn advance<R: Rng>(game: &mut TickGame, rng: &mut R) -> StepResult {
    if game.phase != TickPhase::Running {
        return StepResult::Skipped;
    }

    game.direction = game.next_direction;
    let (d_row, d_col) = game.direction.delta();
    let next = game.head().offset(d_row, d_col);

    let eating = game.food == Some(next);
    if let Some(cause) = check_collision(&game.snake, next, game.rows, game.cols, eating) {
        game.phase = TickPhase::GameOver(cause);
        return StepResult::Collided(cause);
    }

    game.snake.push_front(next);
    game.steps += 1;

    if eating {
        game.score += 1;
        game.streak += 1;

        game.food = spawn_food(game, rng);
        if game.food.is_none() {
            game.phase = TickPhase::Won;
            return StepResult::Won;
        }

        // Level up every LEVEL_UP_FOOD growths; speed up, floored, never
        // reset within a match.
        let new_level = 1 + game.score / LEVEL_UP_FOOD;
        let leveled_up = new_level != game.level;
        if leveled_up {
            game.level = new_level;
            game.tick_interval_ms = MIN_TICK_MS.max(game.tick_interval_ms * 92 / 100);
        }
        StepResult::Ate { leveled_up }
    } else {
        game.snake.pop_back();
        game.streak = 0;
        StepResult::Moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;
    use crate::tick::types::BASE_TICK_MS;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(99)
    }

    fn running_game(rng: &mut ChaCha8Rng) -> TickGame {
        let mut game = TickGame::new(20, 20, rng);
        start(&mut game);
        game
    }

    /// Place the snake at explicit positions (head first).
    fn place_snake(game: &mut TickGame, segments: &[(i16, i16)]) {
        game.snake = segments
            .iter()
            .map(|&(row, col)| Pos::new(row, col))
            .collect();
    }

    #[test]
    fn test_advance_is_a_noop_unless_running() {
        let mut rng = rng();
        let mut game = TickGame::new(20, 20, &mut rng);
        let head = game.head();

        assert_eq!(advance(&mut game, &mut rng), StepResult::Skipped);
        assert_eq!(game.head(), head);

        start(&mut game);
        toggle_pause(&mut game);
        assert_eq!(advance(&mut game, &mut rng), StepResult::Skipped);
        assert_eq!(game.head(), head);
        assert_eq!(game.steps, 0);
    }

    #[test]
    fn test_phase_transitions() {
        let mut rng = rng();
        let mut game = TickGame::new(20, 20, &mut rng);
        assert_eq!(game.phase, TickPhase::Idle);
        start(&mut game);
        assert_eq!(game.phase, TickPhase::Running);
        toggle_pause(&mut game);
        assert_eq!(game.phase, TickPhase::Paused);
        toggle_pause(&mut game);
        assert_eq!(game.phase, TickPhase::Running);
    }

    #[test]
    fn test_terminal_phase_is_sticky() {
        let mut rng = rng();
        let mut game = running_game(&mut rng);
        game.phase = TickPhase::GameOver(CollisionCause::Wall);
        start(&mut game);
        toggle_pause(&mut game);
        assert_eq!(game.phase, TickPhase::GameOver(CollisionCause::Wall));
        assert_eq!(advance(&mut game, &mut rng), StepResult::Skipped);
    }

    #[test]
    fn test_plain_move_keeps_length() {
        let mut rng = rng();
        let mut game = running_game(&mut rng);
        game.food = Some(Pos::new(0, 0));
        let head = game.head();
        let len = game.snake.len();

        assert_eq!(advance(&mut game, &mut rng), StepResult::Moved);
        assert_eq!(game.head(), Pos::new(head.row, head.col + 1));
        assert_eq!(game.snake.len(), len);
        assert_eq!(game.steps, 1);
    }

    #[test]
    fn test_eating_grows_and_scores() {
        let mut rng = rng();
        let mut game = running_game(&mut rng);
        // Snake at (5,7) head, (5,6), (5,5); food directly ahead
        place_snake(&mut game, &[(5, 7), (5, 6), (5, 5)]);
        game.food = Some(Pos::new(5, 8));

        let result = advance(&mut game, &mut rng);
        assert_eq!(result, StepResult::Ate { leveled_up: false });
        assert_eq!(game.head(), Pos::new(5, 8));
        assert_eq!(game.snake.len(), 4, "growth keeps the tail");
        assert_eq!(game.score, 1);
        assert_eq!(game.streak, 1);
        let food = game.food.expect("food respawned");
        assert!(!game.snake.contains(&food));
    }

    #[test]
    fn test_streak_resets_on_plain_move() {
        let mut rng = rng();
        let mut game = running_game(&mut rng);
        place_snake(&mut game, &[(5, 7), (5, 6), (5, 5)]);
        game.food = Some(Pos::new(5, 8));
        advance(&mut game, &mut rng);
        assert_eq!(game.streak, 1);

        game.food = Some(Pos::new(0, 0));
        advance(&mut game, &mut rng);
        assert_eq!(game.streak, 0);
    }

    #[test]
    fn test_wall_collision_ends_game() {
        let mut rng = rng();
        let mut game = running_game(&mut rng);
        place_snake(&mut game, &[(5, 19), (5, 18), (5, 17)]);
        game.food = Some(Pos::new(0, 0));

        assert_eq!(
            advance(&mut game, &mut rng),
            StepResult::Collided(CollisionCause::Wall)
        );
        assert_eq!(game.phase, TickPhase::GameOver(CollisionCause::Wall));
        // Body untouched by the fatal step
        assert_eq!(game.head(), Pos::new(5, 19));
    }

    #[test]
    fn test_self_collision_ends_game() {
        let mut rng = rng();
        let mut game = running_game(&mut rng);
        // U-turn: moving right from (5,5) into (5,6), which the body holds
        place_snake(&mut game, &[(5, 5), (4, 5), (4, 6), (5, 6), (6, 6)]);
        game.food = Some(Pos::new(0, 0));

        assert_eq!(
            advance(&mut game, &mut rng),
            StepResult::Collided(CollisionCause::SelfHit)
        );
        assert_eq!(game.phase, TickPhase::GameOver(CollisionCause::SelfHit));
    }

    #[test]
    fn test_tail_chasing_is_allowed() {
        let mut rng = rng();
        let mut game = running_game(&mut rng);
        // Tight loop: head (5,5), body (6,5), (6,6), tail (5,6). Moving right
        // puts the head on (5,6), which the tail vacates this same step.
        place_snake(&mut game, &[(5, 5), (6, 5), (6, 6), (5, 6)]);
        game.direction = Direction::Right;
        game.next_direction = Direction::Right;
        game.food = Some(Pos::new(0, 0));

        assert_eq!(advance(&mut game, &mut rng), StepResult::Moved);
        assert_eq!(game.head(), Pos::new(5, 6));
        assert!(!game.is_over());
    }

    #[test]
    fn test_reversal_rejected_while_long() {
        let mut rng = rng();
        let mut game = running_game(&mut rng);
        assert_eq!(game.direction, Direction::Right);

        assert!(!set_direction(&mut game, Direction::Left));
        assert_eq!(game.next_direction, Direction::Right);

        // Direction is still Right after the next step
        game.food = Some(Pos::new(0, 0));
        advance(&mut game, &mut rng);
        assert_eq!(game.direction, Direction::Right);
    }

    #[test]
    fn test_reversal_allowed_for_single_segment() {
        let mut rng = rng();
        let mut game = running_game(&mut rng);
        place_snake(&mut game, &[(5, 5)]);
        assert!(set_direction(&mut game, Direction::Left));
        assert_eq!(game.next_direction, Direction::Left);
    }

    #[test]
    fn test_perpendicular_turn_applied_next_step() {
        let mut rng = rng();
        let mut game = running_game(&mut rng);
        game.food = Some(Pos::new(0, 0));
        let head = game.head();

        assert!(set_direction(&mut game, Direction::Up));
        // Buffered, not applied yet
        assert_eq!(game.direction, Direction::Right);

        advance(&mut game, &mut rng);
        assert_eq!(game.direction, Direction::Up);
        assert_eq!(game.head(), Pos::new(head.row - 1, head.col));
    }

    #[test]
    fn test_input_rejected_after_game_over() {
        let mut rng = rng();
        let mut game = running_game(&mut rng);
        game.phase = TickPhase::GameOver(CollisionCause::Wall);
        assert!(!set_direction(&mut game, Direction::Up));
    }

    #[test]
    fn test_level_up_speeds_up_with_floor() {
        let mut rng = rng();
        let mut game = running_game(&mut rng);
        game.score = LEVEL_UP_FOOD - 1;
        place_snake(&mut game, &[(5, 7), (5, 6), (5, 5)]);
        game.food = Some(Pos::new(5, 8));

        let result = advance(&mut game, &mut rng);
        assert_eq!(result, StepResult::Ate { leveled_up: true });
        assert_eq!(game.level, 2);
        assert_eq!(game.tick_interval_ms, BASE_TICK_MS * 92 / 100);

        // Repeated level-ups never go below the floor
        game.tick_interval_ms = MIN_TICK_MS;
        game.score = 2 * LEVEL_UP_FOOD - 1;
        place_snake(&mut game, &[(5, 7), (5, 6), (5, 5)]);
        game.food = Some(Pos::new(5, 8));
        advance(&mut game, &mut rng);
        assert_eq!(game.tick_interval_ms, MIN_TICK_MS);
    }

    #[test]
    fn test_board_full_is_a_win() {
        let mut rng = rng();
        let mut game = TickGame::new(3, 5, &mut rng);
        start(&mut game);
        // Path covers every cell except (0,0); head at (1,0) ready to move up
        let mut segments = vec![(1, 0), (1, 1), (1, 2), (1, 3), (1, 4)];
        segments.extend([(2, 4), (2, 3), (2, 2), (2, 1), (2, 0)]);
        segments.extend([(0, 4), (0, 3), (0, 2), (0, 1)]);
        place_snake(&mut game, &segments);
        game.food = Some(Pos::new(0, 0));
        game.next_direction = Direction::Up;
        game.direction = Direction::Up;

        assert_eq!(advance(&mut game, &mut rng), StepResult::Won);
        assert_eq!(game.phase, TickPhase::Won);
        assert!(game.food.is_none());
        assert_eq!(game.snake.len(), 15);
    }
}
