//! Decision-tree AI behavior on concrete positions and in full games

use tttree::{
    Error,
    ai::{DecisionContext, DecisionTreeAi, RandomAi, play_game},
    ports::Decider,
    tictactoe::{Cell, CellValue, GameOutcome, GameState, Player, ProjectedBoard},
};

fn cell(row: usize, column: usize) -> Cell {
    Cell::new(row, column).unwrap()
}

fn decide(board: &ProjectedBoard, ai: Player) -> Result<Cell, Error> {
    DecisionTreeAi::new().choose_cell(&DecisionContext::new(ai.is_x(), board))
}

mod positions {
    use super::*;

    #[test]
    fn parses_position_x_ahead_with_turn_suffix() {
        let board = ProjectedBoard::from_string("XX.O....._X").unwrap();
        assert_eq!(board.to_move(), Player::X);
        assert_eq!(decide(&board, Player::X).unwrap(), cell(0, 2));
    }

    #[test]
    fn completes_the_top_row() {
        // X X .
        // O . .
        // . . .   X to move
        let board = ProjectedBoard::new()
            .with_set(cell(0, 0), CellValue::X)
            .with_set(cell(0, 1), CellValue::X)
            .with_set(cell(1, 0), CellValue::O);
        assert_eq!(board.to_move(), Player::X);

        assert_eq!(decide(&board, Player::X).unwrap(), cell(0, 2));
    }

    #[test]
    fn blocks_the_column_threat() {
        // X . O
        // . . O
        // . X .   X to move, O threatens (2,2)
        let board = ProjectedBoard::from_string("X.O..O.X.").unwrap();
        assert_eq!(board.to_move(), Player::X);

        assert_eq!(decide(&board, Player::X).unwrap(), cell(2, 2));
    }

    #[test]
    fn prefers_winning_over_blocking() {
        // X X .
        // O O .
        // X . .   O to move
        let board = ProjectedBoard::from_string("XX.OO.X..").unwrap();
        assert_eq!(decide(&board, Player::O).unwrap(), cell(1, 2));
    }

    #[test]
    fn no_decision_on_finished_boards() {
        let drawn = ProjectedBoard::from_string("XOXXOOOXX").unwrap();
        let won = ProjectedBoard::from_string("XXXOO....").unwrap();

        assert!(matches!(
            decide(&drawn, Player::O),
            Err(Error::NoDecisionAvailable)
        ));
        assert!(matches!(
            decide(&won, Player::O),
            Err(Error::NoDecisionAvailable)
        ));
    }

    #[test]
    fn same_context_same_choice() {
        let board = ProjectedBoard::from_string("X...O....").unwrap();
        let first = decide(&board, Player::X).unwrap();
        for _ in 0..3 {
            assert_eq!(decide(&board, Player::X).unwrap(), first);
        }
    }
}

mod games {
    use super::*;

    #[test]
    fn ai_against_itself_draws_on_a_full_board() {
        let mut x = DecisionTreeAi::with_name("X");
        let mut o = DecisionTreeAi::with_name("O");

        let record = play_game(Player::X, &mut x, &mut o).unwrap();

        assert_eq!(record.outcome, GameOutcome::Draw);
        assert!(record.board.is_full());
        assert!(record.board.winning_line().is_none());
        assert_eq!(record.board.placements().len(), 9);
    }

    #[test]
    fn ai_as_x_never_loses_to_random() {
        let mut ai = DecisionTreeAi::new();
        for seed in 0..3 {
            let mut random = RandomAi::with_seed(seed);
            let record = play_game(Player::X, &mut ai, &mut random).unwrap();
            assert_ne!(
                record.outcome,
                GameOutcome::Win(Player::O),
                "lost with seed {seed}: {}",
                record.board
            );
        }
    }

    #[test]
    fn ai_as_o_never_loses_to_random() {
        let mut ai = DecisionTreeAi::new();
        for seed in 0..10 {
            let mut random = RandomAi::with_seed(seed);
            let record = play_game(Player::X, &mut random, &mut ai).unwrap();
            assert_ne!(
                record.outcome,
                GameOutcome::Win(Player::X),
                "lost with seed {seed}: {}",
                record.board
            );
        }
    }

    #[test]
    fn ai_against_itself_draws_when_o_opens() {
        let mut x = DecisionTreeAi::with_name("X");
        let mut o = DecisionTreeAi::with_name("O");

        let record = play_game(Player::O, &mut x, &mut o).unwrap();

        assert_eq!(record.outcome, GameOutcome::Draw);
        assert_eq!(record.board.placements()[0].player, Player::O);
        assert_eq!(record.board.placements().len(), 9);
    }

    #[test]
    fn ai_never_loses_when_o_opens() {
        let mut ai = DecisionTreeAi::new();
        for seed in 0..3 {
            let mut random = RandomAi::with_seed(seed);
            let as_x = play_game(Player::O, &mut ai, &mut random).unwrap();
            assert_ne!(as_x.outcome, GameOutcome::Win(Player::O), "{}", as_x.board);

            let mut random = RandomAi::with_seed(seed);
            let as_o = play_game(Player::O, &mut random, &mut ai).unwrap();
            assert_ne!(as_o.outcome, GameOutcome::Win(Player::X), "{}", as_o.board);
        }
    }

    #[test]
    fn deciders_report_their_names() {
        assert_eq!(DecisionTreeAi::new().name(), "DecisionTree");
        assert_eq!(DecisionTreeAi::with_name("Alice").name(), "Alice");
        assert_eq!(RandomAi::with_seed(0).name(), "Random");
    }

    #[test]
    fn any_decider_can_drive_the_live_board() {
        let mut random = RandomAi::with_seed(99);
        let board = ProjectedBoard::from_string("XOXOXO...").unwrap();
        let context = DecisionContext::new(true, &board);

        let choice = random.decide(&context).unwrap();
        assert!(board.can_place_at(choice));
    }
}
